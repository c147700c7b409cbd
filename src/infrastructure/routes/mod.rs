//! Route source implementations

mod page_scanner;

pub use page_scanner::{url_path_for, PageScanner, PAGE_EXTENSIONS};
