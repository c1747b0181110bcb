use crate::card::CardType;
use crate::error::ClassifyError;
use crate::page::CardPage;

/// Marker sets in evaluation order. Spell/trap labels come before any
/// monster check, and every specific monster kind comes before the
/// generic normal/effect check, so a description mentioning several
/// labels still resolves to the most specific category.
const MARKER_SETS: [(&[&str], CardType); 7] = [
    (&["通常罠", "永続罠", "カウンター罠"], CardType::Trap),
    (
        &[
            "通常魔法",
            "永続魔法",
            "速攻魔法",
            "装備魔法",
            "フィールド魔法",
            "儀式魔法",
        ],
        CardType::Spell,
    ),
    (&["リンクモンスター"], CardType::LinkMonster),
    (
        &["エクシーズモンスター", "Ｘモンスター"],
        CardType::XyzMonster,
    ),
    (&["シンクロモンスター"], CardType::SynchroMonster),
    (&["融合モンスター"], CardType::FusionMonster),
    (
        &["通常モンスター", "効果モンスター"],
        CardType::NormalOrEffectMonster,
    ),
];

/// Decides the card category from the description block's text.
///
/// Pure read of the page. A page matching no marker set is fatal to the
/// whole batch (handled by the pipeline); the error names the URL.
pub fn classify(page: &CardPage) -> Result<CardType, ClassifyError> {
    let unknown = || ClassifyError::UnknownCardType {
        url: page.url().to_string(),
    };

    let text = page.description_text().ok_or_else(unknown)?;
    MARKER_SETS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| text.contains(marker)))
        .map(|(_, card_type)| *card_type)
        .ok_or_else(unknown)
}
