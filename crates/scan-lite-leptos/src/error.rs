//! Startup errors

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that abort application startup
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// No `window` or `document` (not running in a browser)
    #[error("No document available")]
    NoDocument,

    /// Mount selector could not be evaluated
    #[error("Invalid mount selector '{0}'")]
    InvalidSelector(String),

    /// Nothing in the document matches the mount selector
    #[error("Mount target '{0}' not found in document")]
    MountTargetMissing(String),

    /// Mount selector matched a non-HTML element (e.g. SVG)
    #[error("Mount target '{0}' is not an HTML element")]
    MountTargetNotHtml(String),

    /// DOM call failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// A plugin failed to install
    #[error("Plugin '{name}' failed to install: {source}")]
    Plugin {
        name: &'static str,
        #[source]
        source: Box<BootstrapError>,
    },
}

impl BootstrapError {
    /// Wrap a DOM exception
    pub fn dom(err: JsValue) -> Self {
        BootstrapError::Dom(format!("{:?}", err))
    }

    pub fn plugin(name: &'static str, source: BootstrapError) -> Self {
        BootstrapError::Plugin {
            name,
            source: Box::new(source),
        }
    }
}

impl From<BootstrapError> for JsValue {
    fn from(err: BootstrapError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
