//! Scene inspector
//!
//! Loads a RON scene document, merges it with the file asset store and prints
//! the resulting scene tree.
//!
//! ```text
//! scene_inspect <document.ron> [pipeline.toml|pipeline.ron]
//! ```

mod tree;

use std::path::Path;
use std::sync::Arc;

use scene_merge::foundation::logging;
use scene_merge::prelude::*;

/// Root name for a document path: the path without its extension, so
/// relative texture paths resolve next to the document
fn root_name(doc_path: &str) -> String {
    Path::new(doc_path).with_extension("").to_string_lossy().replace('\\', "/")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let Some(doc_path) = args.next() else {
        eprintln!("usage: scene_inspect <document.ron> [pipeline.toml|pipeline.ron]");
        std::process::exit(2);
    };

    let config = match args.next() {
        Some(path) => PipelineConfig::load_from_file(&path)?,
        None => PipelineConfig::default(),
    };
    logging::init_with_level(&config.log_level);

    log::info!("Loading document {}", doc_path);
    let doc = Document::load_from_file(&doc_path)?;

    let store = Arc::new(FileAssetStore::new(&config.assets));
    let pipeline = Pipeline::new(store, &config.merge);

    let mut scene = Scene::new(root_name(&doc_path));
    let ctx = pipeline.merge_fresh(&doc, &mut scene)?;

    print!("{}", tree::render(&scene));
    println!("{} nodes, {} context entries", scene.len(), ctx.len());
    Ok(())
}
