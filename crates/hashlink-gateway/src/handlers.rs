mod url;

pub use url::{
    create_url_handler, fallback_handler, method_not_allowed_handler, post_not_root_handler,
    redirect_handler, usage_handler, USAGE,
};
