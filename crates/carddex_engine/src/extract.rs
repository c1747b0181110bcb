use std::sync::OnceLock;

use regex::Regex;

use crate::card::{
    CardRecord, CardType, FusionMonsterCard, LinkArrow, LinkMonsterCard, MonsterCard,
    MonsterSubtype, SpellCard, SpellSubtype, Stat, SynchroMonsterCard, TrapCard, TrapSubtype,
    XyzMonsterCard,
};
use crate::error::ExtractError;
use crate::image::resolve_image;
use crate::page::CardPage;

/// Stats line of level-bearing monsters: 星N/属性/種族/攻N/守N.
fn level_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"星\s*(\d+|[?？])\s*/\s*([^\s/【】]+属性)\s*/\s*([^\s/【】]+族)\s*/\s*攻\s*(\d+|[?？－ー-]+)\s*/\s*守\s*(\d+|[?？－ー-]+)",
        )
        .expect("level stats pattern")
    })
}

/// Stats line of Xyz monsters: ランクN/属性/種族/攻N/守N.
fn rank_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"ランク\s*(\d+|[?？])\s*/\s*([^\s/【】]+属性)\s*/\s*([^\s/【】]+族)\s*/\s*攻\s*(\d+|[?？－ー-]+)\s*/\s*守\s*(\d+|[?？－ー-]+)",
        )
        .expect("rank stats pattern")
    })
}

/// Stats line of link monsters, which carry no DEF: 属性/種族/攻N.
fn link_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([^\s/【】]+属性)\s*/\s*([^\s/【】]+族)\s*/\s*攻\s*(\d+|[?？－ー-]+)")
            .expect("link stats pattern")
    })
}

fn link_rating_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"LINK\s*[-－ー―]\s*(\d+|[?？]+)").expect("link rating pattern"))
}

fn link_arrows_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"【LINK\s*[-－ー―]\s*(?:\d+|[?？]+)\s*[：:]([^】]+)】")
            .expect("link arrows pattern")
    })
}

/// True for any of the three stats-line shapes; used when cleaning the
/// card text paragraph.
pub(crate) fn is_stats_line(line: &str) -> bool {
    level_line_re().is_match(line) || rank_line_re().is_match(line) || link_line_re().is_match(line)
}

/// Runs the extraction strategy matching `card_type` over the page.
pub fn extract_record(card_type: CardType, page: &CardPage) -> Result<CardRecord, ExtractError> {
    match card_type {
        CardType::Trap => extract_trap(page),
        CardType::Spell => extract_spell(page),
        CardType::NormalOrEffectMonster => extract_monster(page),
        CardType::XyzMonster => extract_xyz(page),
        CardType::FusionMonster => extract_fusion(page),
        CardType::SynchroMonster => extract_synchro(page),
        CardType::LinkMonster => extract_link(page),
    }
}

fn missing(page: &CardPage, field: &'static str) -> ExtractError {
    ExtractError::MissingField {
        url: page.url().to_string(),
        field,
    }
}

fn card_name(page: &CardPage) -> Result<String, ExtractError> {
    page.card_name().ok_or_else(|| missing(page, "card name"))
}

fn image_filename(page: &CardPage) -> Result<String, ExtractError> {
    resolve_image(page).map(|(_, reference)| reference.into_filename())
}

fn description(page: &CardPage) -> Result<String, ExtractError> {
    page.description_text()
        .ok_or_else(|| missing(page, "card description"))
}

fn card_text(page: &CardPage) -> Result<String, ExtractError> {
    let lines = page.card_text_lines();
    if lines.is_empty() {
        return Err(missing(page, "card text"));
    }
    Ok(lines.join(" "))
}

/// Extra-deck monsters open the card text with their summoning
/// materials; split that line off from the effect text.
fn materials_and_text(page: &CardPage) -> Result<(String, String), ExtractError> {
    let mut lines = page.card_text_lines();
    if lines.is_empty() {
        return Err(missing(page, "materials"));
    }
    let materials = lines.remove(0);
    Ok((materials, lines.join(" ")))
}

fn extract_trap(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let subtype = if desc.contains("カウンター罠") {
        TrapSubtype::Counter
    } else if desc.contains("永続罠") {
        TrapSubtype::Continuous
    } else {
        TrapSubtype::Normal
    };

    Ok(CardRecord::Trap(TrapCard {
        name: card_name(page)?,
        subtype,
        text: card_text(page)?,
        image: image_filename(page)?,
    }))
}

fn extract_spell(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let subtype = if desc.contains("永続魔法") {
        SpellSubtype::Continuous
    } else if desc.contains("速攻魔法") {
        SpellSubtype::QuickPlay
    } else if desc.contains("装備魔法") {
        SpellSubtype::Equip
    } else if desc.contains("フィールド魔法") {
        SpellSubtype::Field
    } else if desc.contains("儀式魔法") {
        SpellSubtype::Ritual
    } else {
        SpellSubtype::Normal
    };

    Ok(CardRecord::Spell(SpellCard {
        name: card_name(page)?,
        subtype,
        text: card_text(page)?,
        image: image_filename(page)?,
    }))
}

fn extract_monster(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let caps = level_line_re()
        .captures(&desc)
        .ok_or_else(|| missing(page, "stats line"))?;
    let subtype = if desc.contains("通常モンスター") {
        MonsterSubtype::Normal
    } else {
        MonsterSubtype::Effect
    };

    Ok(CardRecord::Monster(MonsterCard {
        name: card_name(page)?,
        subtype,
        level: Stat::parse(&caps[1]),
        attribute: caps[2].to_string(),
        race: caps[3].to_string(),
        atk: Stat::parse(&caps[4]),
        def: Stat::parse(&caps[5]),
        text: card_text(page)?,
        image: image_filename(page)?,
    }))
}

fn extract_xyz(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let caps = rank_line_re()
        .captures(&desc)
        .ok_or_else(|| missing(page, "stats line"))?;
    let (materials, text) = materials_and_text(page)?;

    Ok(CardRecord::Xyz(XyzMonsterCard {
        name: card_name(page)?,
        rank: Stat::parse(&caps[1]),
        attribute: caps[2].to_string(),
        race: caps[3].to_string(),
        atk: Stat::parse(&caps[4]),
        def: Stat::parse(&caps[5]),
        materials,
        text,
        image: image_filename(page)?,
    }))
}

fn extract_fusion(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let caps = level_line_re()
        .captures(&desc)
        .ok_or_else(|| missing(page, "stats line"))?;
    let (materials, text) = materials_and_text(page)?;

    Ok(CardRecord::Fusion(FusionMonsterCard {
        name: card_name(page)?,
        level: Stat::parse(&caps[1]),
        attribute: caps[2].to_string(),
        race: caps[3].to_string(),
        atk: Stat::parse(&caps[4]),
        def: Stat::parse(&caps[5]),
        materials,
        text,
        image: image_filename(page)?,
    }))
}

fn extract_synchro(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let caps = level_line_re()
        .captures(&desc)
        .ok_or_else(|| missing(page, "stats line"))?;
    let (materials, text) = materials_and_text(page)?;

    Ok(CardRecord::Synchro(SynchroMonsterCard {
        name: card_name(page)?,
        level: Stat::parse(&caps[1]),
        attribute: caps[2].to_string(),
        race: caps[3].to_string(),
        atk: Stat::parse(&caps[4]),
        def: Stat::parse(&caps[5]),
        materials,
        text,
        image: image_filename(page)?,
    }))
}

fn extract_link(page: &CardPage) -> Result<CardRecord, ExtractError> {
    let desc = description(page)?;
    let rating = link_rating_re()
        .captures(&desc)
        .map(|caps| Stat::parse(&caps[1]))
        .ok_or_else(|| missing(page, "link rating"))?;
    let arrows = link_arrows(page, &desc)?;
    let caps = link_line_re()
        .captures(&desc)
        .ok_or_else(|| missing(page, "stats line"))?;

    Ok(CardRecord::Link(LinkMonsterCard {
        name: card_name(page)?,
        rating,
        arrows,
        attribute: caps[1].to_string(),
        race: caps[2].to_string(),
        atk: Stat::parse(&caps[3]),
        def: Stat::Blank,
        text: card_text(page)?,
        image: image_filename(page)?,
    }))
}

fn link_arrows(page: &CardPage, desc: &str) -> Result<Vec<LinkArrow>, ExtractError> {
    let caps = link_arrows_re()
        .captures(desc)
        .ok_or_else(|| missing(page, "link markers"))?;

    let mut arrows = Vec::new();
    for token in caps[1].split(['/', '／']).map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let arrow = LinkArrow::from_label(token).ok_or_else(|| ExtractError::InvalidField {
            url: page.url().to_string(),
            field: "link markers",
            value: token.to_string(),
        })?;
        arrows.push(arrow);
    }

    if arrows.is_empty() {
        return Err(missing(page, "link markers"));
    }
    Ok(arrows)
}
