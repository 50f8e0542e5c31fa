//! Viewer embed helper.
//!
//! Renders the `<script>` element that mounts an OpenSeadragon viewer for
//! a generated pyramid. The viewer locates tiles through the descriptor
//! file and the `<level>/<col>_<row>.<format>` naming convention; this
//! helper only produces the configuration blob that points it there.

use serde_json::json;

use crate::error::ViewerError;

/// Default asset prefix for OpenSeadragon's control images.
pub const DEFAULT_PREFIX_URL: &str = "/assets/openseadragon/";

/// Options serialized into the OpenSeadragon constructor call.
///
/// `element_id` and `tile_sources` are required; `prefix_url` falls back
/// to [`DEFAULT_PREFIX_URL`].
#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    /// DOM id of the element the viewer mounts into
    pub element_id: Option<String>,
    /// Tile source reference, typically the descriptor URL
    pub tile_sources: Option<String>,
    /// Base path for viewer assets
    pub prefix_url: Option<String>,
}

/// Render the `<script>` element instantiating an OpenSeadragon viewer.
///
/// # Errors
///
/// Returns [`ViewerError::MissingElementId`] or
/// [`ViewerError::MissingTileSource`] when a required option is absent.
pub fn viewer_script(options: &ViewerOptions) -> Result<String, ViewerError> {
    let element_id = options
        .element_id
        .as_deref()
        .ok_or(ViewerError::MissingElementId)?;
    let tile_sources = options
        .tile_sources
        .as_deref()
        .ok_or(ViewerError::MissingTileSource)?;
    let prefix_url = options.prefix_url.as_deref().unwrap_or(DEFAULT_PREFIX_URL);

    let blob = json!({
        "id": element_id,
        "tileSources": tile_sources,
        "prefixUrl": prefix_url,
    });

    Ok(format!(
        r#"<script type="text/javascript">var viewer = OpenSeadragon({blob});</script>"#
    ))
}
