use std::fmt::Write;

use crate::card::{
    CardRecord, FusionMonsterCard, LinkMonsterCard, MonsterCard, MonsterSubtype, SpellCard, Stat,
    SynchroMonsterCard, TrapCard, XyzMonsterCard,
};

/// Renders a record as the TypeScript module the downstream game engine
/// consumes: `export default { ... };` with a fixed field order per
/// category. The output is deterministic byte for byte.
pub fn render_module(record: &CardRecord) -> String {
    let mut out = String::from("export default {\n");
    match record {
        CardRecord::Trap(card) => render_trap(&mut out, card),
        CardRecord::Spell(card) => render_spell(&mut out, card),
        CardRecord::Monster(card) => render_monster(&mut out, card),
        CardRecord::Xyz(card) => render_xyz(&mut out, card),
        CardRecord::Fusion(card) => render_fusion(&mut out, card),
        CardRecord::Synchro(card) => render_synchro(&mut out, card),
        CardRecord::Link(card) => render_link(&mut out, card),
    }
    out.push_str("};\n");
    out
}

fn render_trap(out: &mut String, card: &TrapCard) {
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "罠");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_const_string(out, "trap_type", card.subtype.label());
}

fn render_spell(out: &mut String, card: &SpellCard) {
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "魔法");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_const_string(out, "magic_type", card.subtype.label());
}

fn render_monster(out: &mut String, card: &MonsterCard) {
    let normal = card.subtype == MonsterSubtype::Normal;
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "モンスター");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_string(out, "monster_type", card.subtype.label());
    push_stat(out, "level", &card.level);
    push_const_string(out, "element", &card.attribute);
    push_const_string(out, "race", &card.race);
    push_stat(out, "attack", &card.atk);
    push_stat(out, "defense", &card.def);
    push_flag(out, "hasDefense", true);
    push_flag(out, "hasLevel", true);
    push_flag(out, "hasRank", false);
    push_flag(out, "hasLink", false);
    push_flag(out, "canNormalSummon", normal);
}

fn render_xyz(out: &mut String, card: &XyzMonsterCard) {
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "モンスター");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_string(out, "monster_type", "エクシーズモンスター");
    push_const_string(out, "element", &card.attribute);
    push_const_string(out, "race", &card.race);
    push_stat(out, "attack", &card.atk);
    push_stat(out, "defense", &card.def);
    push_flag(out, "hasDefense", true);
    push_flag(out, "hasLevel", false);
    push_flag(out, "hasRank", true);
    push_flag(out, "hasLink", false);
    push_flag(out, "canNormalSummon", false);
    push_stat(out, "rank", &card.rank);
    push_string(out, "materials", &card.materials);
    push_function(out, "filterAvailableMaterials");
    push_function(out, "materialCondition");
}

fn render_fusion(out: &mut String, card: &FusionMonsterCard) {
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "モンスター");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_string(out, "monster_type", "融合モンスター");
    push_stat(out, "level", &card.level);
    push_const_string(out, "element", &card.attribute);
    push_const_string(out, "race", &card.race);
    push_stat(out, "attack", &card.atk);
    push_stat(out, "defense", &card.def);
    push_flag(out, "hasDefense", true);
    push_flag(out, "hasLevel", true);
    push_flag(out, "hasRank", false);
    push_flag(out, "hasLink", false);
    push_flag(out, "canNormalSummon", false);
    push_string(out, "materials", &card.materials);
    push_function(out, "filterAvailableMaterials");
    push_function(out, "materialCondition");
}

fn render_synchro(out: &mut String, card: &SynchroMonsterCard) {
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "モンスター");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_string(out, "monster_type", "シンクロモンスター");
    push_stat(out, "level", &card.level);
    push_const_string(out, "element", &card.attribute);
    push_const_string(out, "race", &card.race);
    push_stat(out, "attack", &card.atk);
    push_stat(out, "defense", &card.def);
    push_flag(out, "hasDefense", true);
    push_flag(out, "hasLevel", true);
    push_flag(out, "hasRank", false);
    push_flag(out, "hasLink", false);
    push_flag(out, "canNormalSummon", false);
    push_string(out, "materials", &card.materials);
    push_function(out, "filterAvailableMaterials");
    push_function(out, "materialCondition");
}

fn render_link(out: &mut String, card: &LinkMonsterCard) {
    push_string(out, "card_name", &card.name);
    push_const_string(out, "card_type", "モンスター");
    push_string(out, "text", &card.text);
    push_string(out, "image", &card.image);
    push_string(out, "monster_type", "リンクモンスター");
    push_stat(out, "link", &card.rating);
    push_arrows(out, card);
    push_const_string(out, "element", &card.attribute);
    push_const_string(out, "race", &card.race);
    push_stat(out, "attack", &card.atk);
    // DEF stays in the record as a blank value, never dropped.
    push_stat(out, "defense", &card.def);
    push_flag(out, "hasDefense", false);
    push_flag(out, "hasLevel", false);
    push_flag(out, "hasRank", false);
    push_flag(out, "hasLink", true);
    push_flag(out, "canNormalSummon", false);
    push_function(out, "filterAvailableMaterials");
    push_function(out, "materialCondition");
}

fn push_string(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "    {key}: \"{}\",", escape(value));
}

fn push_const_string(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "    {key}: \"{}\" as const,", escape(value));
}

fn push_stat(out: &mut String, key: &str, stat: &Stat) {
    match stat {
        Stat::Value(value) => {
            let _ = writeln!(out, "    {key}: {value},");
        }
        Stat::Unknown(raw) => {
            let _ = writeln!(out, "    {key}: \"{}\",", escape(raw));
        }
        Stat::Blank => {
            let _ = writeln!(out, "    {key}: \"\",");
        }
    }
}

fn push_flag(out: &mut String, key: &str, value: bool) {
    let _ = writeln!(out, "    {key}: {value} as const,");
}

fn push_function(out: &mut String, key: &str) {
    let _ = writeln!(out, "    {key}: () => true,");
}

fn push_arrows(out: &mut String, card: &LinkMonsterCard) {
    let labels: Vec<String> = card
        .arrows
        .iter()
        .map(|arrow| format!("\"{}\"", arrow.label()))
        .collect();
    let _ = writeln!(out, "    linkDirection: [{}] as const,", labels.join(", "));
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
