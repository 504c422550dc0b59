//! Media records and how they are displayed.
//!
//! - `content_type`: classify a stored URL into image, video, YouTube or webpage
//! - `youtube`: video ID extraction and embed URLs
//! - `render`: dispatch a record to its rendering strategy
//! - `library`: title search over a fetched record list

mod content_type;
mod library;
mod record;
mod render;
mod youtube;

pub use content_type::{classify, ContentType, YOUTUBE_ID_LEN};
pub use library::{decode_html_entities, filter_records, find_record};
pub use record::{ClassifiedRecord, MediaRecord};
pub use render::{render, render_html, RenderMode, ViewNode, INVALID_YOUTUBE_MESSAGE, LINK_LABEL};
pub use youtube::{embed_url, extract_id};
