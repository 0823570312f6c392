//! Fixed product links.

/// Comic front page, reachable from the tray menu.
pub const COMIC_URL: &str = "https://www.moonlark-comic.com/";
/// Comic archive, reachable from the tray menu.
pub const ARCHIVE_URL: &str = "https://www.moonlark-comic.com/archive";
/// The project's own page.
pub const ABOUT_URL: &str = "https://moonlark.itch.io/deskmates";
/// The story feed the poll worker watches.
pub const FEED_URL: &str = "https://www.moonlark-comic.com/story/rss";
