//! Carddex engine: classify card detail pages and extract records.
mod card;
mod classify;
mod decode;
mod error;
mod extract;
mod fetch;
mod filename;
mod image;
mod page;
mod persist;
mod pipeline;
mod serialize;

pub use card::{
    CardRecord, CardType, FusionMonsterCard, LinkArrow, LinkMonsterCard, MonsterCard,
    MonsterSubtype, SpellCard, SpellSubtype, Stat, SynchroMonsterCard, TrapCard, TrapSubtype,
    XyzMonsterCard,
};
pub use classify::classify;
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use error::{BatchError, ClassifyError, ExtractError, FailureKind, FetchError, UrlError};
pub use extract::extract_record;
pub use fetch::{ContentKind, FetchMetadata, FetchOutput, FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::{card_id, record_filename};
pub use image::{resolve_image, ImageReference};
pub use page::CardPage;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{BatchReport, CardSummary, Pipeline, PipelineConfig, SkippedUrl, Stage};
pub use serialize::render_module;
