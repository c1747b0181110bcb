#![allow(dead_code)]

use carddex_engine::CardPage;
use url::Url;

/// Detail-page URL the fixtures pretend to come from.
pub const PAGE_URL: &str = "https://www.ka-nabell.com/?act=sell_detail&id=100043950";

pub fn page_from(markup: &str) -> CardPage {
    CardPage::new(Url::parse(PAGE_URL).unwrap(), markup)
}
