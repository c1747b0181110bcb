mod common;

use carddex_engine::{classify, CardType, ClassifyError};
use common::{page_from, PAGE_URL};

const TRAP: &str = include_str!("fixtures/trap.html");
const SPELL: &str = include_str!("fixtures/spell.html");
const MONSTER: &str = include_str!("fixtures/monster.html");
const XYZ: &str = include_str!("fixtures/xyz.html");
const FUSION: &str = include_str!("fixtures/fusion.html");
const SYNCHRO: &str = include_str!("fixtures/synchro.html");
const LINK: &str = include_str!("fixtures/link.html");
const UNKNOWN: &str = include_str!("fixtures/unknown.html");

#[test]
fn each_fixture_classifies_to_its_own_category() {
    let cases = [
        (TRAP, CardType::Trap),
        (SPELL, CardType::Spell),
        (MONSTER, CardType::NormalOrEffectMonster),
        (XYZ, CardType::XyzMonster),
        (FUSION, CardType::FusionMonster),
        (SYNCHRO, CardType::SynchroMonster),
        (LINK, CardType::LinkMonster),
    ];
    for (markup, expected) in cases {
        let page = page_from(markup);
        assert_eq!(classify(&page).unwrap(), expected, "fixture for {expected}");
    }
}

#[test]
fn unknown_markup_fails_and_names_the_url() {
    let page = page_from(UNKNOWN);
    let err = classify(&page).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::UnknownCardType {
            url: PAGE_URL.to_string()
        }
    );
    assert!(err.to_string().contains(PAGE_URL));
}

#[test]
fn page_without_description_block_is_unclassifiable() {
    let page = page_from("<html><body><p>no card here</p></body></html>");
    assert!(classify(&page).is_err());
}

#[test]
fn link_marker_wins_over_the_generic_monster_marker() {
    // Link pages list "effect monsters" as summoning materials, so both
    // markers appear; the more specific one must win.
    let markup = r#"<div class="cardDescription"><p>【リンクモンスター】<br>効果モンスター２体以上</p></div>"#;
    assert_eq!(classify(&page_from(markup)).unwrap(), CardType::LinkMonster);
}

#[test]
fn trap_marker_wins_over_monster_mentions() {
    let markup = r#"<div class="cardDescription"><p>【カウンター罠】<br>効果モンスターの召喚を無効にする。</p></div>"#;
    assert_eq!(classify(&page_from(markup)).unwrap(), CardType::Trap);
}
