use std::fmt;

/// The seven card categories a detail page can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Trap,
    Spell,
    NormalOrEffectMonster,
    XyzMonster,
    FusionMonster,
    SynchroMonster,
    LinkMonster,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardType::Trap => "trap",
            CardType::Spell => "spell",
            CardType::NormalOrEffectMonster => "monster",
            CardType::XyzMonster => "xyz monster",
            CardType::FusionMonster => "fusion monster",
            CardType::SynchroMonster => "synchro monster",
            CardType::LinkMonster => "link monster",
        };
        write!(f, "{name}")
    }
}

/// A numeric card stat as it appears in the source markup.
///
/// Pages print `?` (or a dash) where a card has no printed value; that
/// placeholder is carried through verbatim rather than coerced to zero.
/// `Blank` is for fields the game rules leave empty, such as a link
/// monster's DEF, which the output preserves as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stat {
    Value(i64),
    Unknown(String),
    Blank,
}

impl Stat {
    /// Parses a raw stat token: digits become `Value`, anything else is
    /// kept as `Unknown` exactly as printed.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(value) => Stat::Value(value),
            Err(_) => Stat::Unknown(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapSubtype {
    Normal,
    Continuous,
    Counter,
}

impl TrapSubtype {
    pub fn label(&self) -> &'static str {
        match self {
            TrapSubtype::Normal => "通常罠",
            TrapSubtype::Continuous => "永続罠",
            TrapSubtype::Counter => "カウンター罠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellSubtype {
    Normal,
    Continuous,
    QuickPlay,
    Equip,
    Field,
    Ritual,
}

impl SpellSubtype {
    pub fn label(&self) -> &'static str {
        match self {
            SpellSubtype::Normal => "通常魔法",
            SpellSubtype::Continuous => "永続魔法",
            SpellSubtype::QuickPlay => "速攻魔法",
            SpellSubtype::Equip => "装備魔法",
            SpellSubtype::Field => "フィールド魔法",
            SpellSubtype::Ritual => "儀式魔法",
        }
    }
}

/// Distinguishes the two kinds that share the generic monster layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterSubtype {
    Normal,
    Effect,
}

impl MonsterSubtype {
    pub fn label(&self) -> &'static str {
        match self {
            MonsterSubtype::Normal => "通常モンスター",
            MonsterSubtype::Effect => "効果モンスター",
        }
    }
}

/// One of the eight link-marker directions, labeled as the source pages
/// print them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkArrow {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl LinkArrow {
    pub fn label(&self) -> &'static str {
        match self {
            LinkArrow::TopLeft => "左上",
            LinkArrow::Top => "上",
            LinkArrow::TopRight => "右上",
            LinkArrow::Left => "左",
            LinkArrow::Right => "右",
            LinkArrow::BottomLeft => "左下",
            LinkArrow::Bottom => "下",
            LinkArrow::BottomRight => "右下",
        }
    }

    /// Maps a marker token from the page (word form or arrow glyph).
    pub fn from_label(token: &str) -> Option<Self> {
        match token {
            "左上" | "↖" => Some(LinkArrow::TopLeft),
            "上" | "↑" => Some(LinkArrow::Top),
            "右上" | "↗" => Some(LinkArrow::TopRight),
            "左" | "←" => Some(LinkArrow::Left),
            "右" | "→" => Some(LinkArrow::Right),
            "左下" | "↙" => Some(LinkArrow::BottomLeft),
            "下" | "↓" => Some(LinkArrow::Bottom),
            "右下" | "↘" => Some(LinkArrow::BottomRight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapCard {
    pub name: String,
    pub subtype: TrapSubtype,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCard {
    pub name: String,
    pub subtype: SpellSubtype,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterCard {
    pub name: String,
    pub subtype: MonsterSubtype,
    pub level: Stat,
    pub attribute: String,
    pub race: String,
    pub atk: Stat,
    pub def: Stat,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyzMonsterCard {
    pub name: String,
    pub rank: Stat,
    pub attribute: String,
    pub race: String,
    pub atk: Stat,
    pub def: Stat,
    pub materials: String,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionMonsterCard {
    pub name: String,
    pub level: Stat,
    pub attribute: String,
    pub race: String,
    pub atk: Stat,
    pub def: Stat,
    pub materials: String,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynchroMonsterCard {
    pub name: String,
    pub level: Stat,
    pub attribute: String,
    pub race: String,
    pub atk: Stat,
    pub def: Stat,
    pub materials: String,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMonsterCard {
    pub name: String,
    pub rating: Stat,
    pub arrows: Vec<LinkArrow>,
    pub attribute: String,
    pub race: String,
    pub atk: Stat,
    /// Link monsters have no DEF; always `Stat::Blank`, serialized as an
    /// empty string rather than omitted.
    pub def: Stat,
    pub text: String,
    pub image: String,
}

/// A fully populated card, tagged by category. Each variant carries only
/// the fields its category defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRecord {
    Trap(TrapCard),
    Spell(SpellCard),
    Monster(MonsterCard),
    Xyz(XyzMonsterCard),
    Fusion(FusionMonsterCard),
    Synchro(SynchroMonsterCard),
    Link(LinkMonsterCard),
}

impl CardRecord {
    pub fn card_type(&self) -> CardType {
        match self {
            CardRecord::Trap(_) => CardType::Trap,
            CardRecord::Spell(_) => CardType::Spell,
            CardRecord::Monster(_) => CardType::NormalOrEffectMonster,
            CardRecord::Xyz(_) => CardType::XyzMonster,
            CardRecord::Fusion(_) => CardType::FusionMonster,
            CardRecord::Synchro(_) => CardType::SynchroMonster,
            CardRecord::Link(_) => CardType::LinkMonster,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CardRecord::Trap(card) => &card.name,
            CardRecord::Spell(card) => &card.name,
            CardRecord::Monster(card) => &card.name,
            CardRecord::Xyz(card) => &card.name,
            CardRecord::Fusion(card) => &card.name,
            CardRecord::Synchro(card) => &card.name,
            CardRecord::Link(card) => &card.name,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            CardRecord::Trap(card) => &card.image,
            CardRecord::Spell(card) => &card.image,
            CardRecord::Monster(card) => &card.image,
            CardRecord::Xyz(card) => &card.image,
            CardRecord::Fusion(card) => &card.image,
            CardRecord::Synchro(card) => &card.image,
            CardRecord::Link(card) => &card.image,
        }
    }
}
