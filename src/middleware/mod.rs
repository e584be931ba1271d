pub mod minify;

pub use minify::minify_html_middleware;
