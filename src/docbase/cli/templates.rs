//! Output templates.
//!
//! Templates live in stand-alone `templates/*.tmp` files so they can be edited
//! and diffed apart from the code, and are pulled in here as string constants.
//!
//! They are minijinja templates rendered with trailing newlines kept, so every
//! line break in the output is one that is visible in the file. Styling goes
//! through the `style` filter; templates pick a style name and never emit
//! escape codes themselves.

pub const POST_DETAIL_TEMPLATE: &str = include_str!("templates/post_detail.tmp");
pub const POST_BODY_TEMPLATE: &str = include_str!("templates/post_body.tmp");
pub const POST_LIST_TEMPLATE: &str = include_str!("templates/post_list.tmp");
pub const POST_URL_TEMPLATE: &str = include_str!("templates/post_url.tmp");
pub const META_TEMPLATE: &str = include_str!("templates/meta.tmp");
pub const TAG_LIST_TEMPLATE: &str = include_str!("templates/tag_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
