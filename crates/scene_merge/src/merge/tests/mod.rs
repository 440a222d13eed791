//! Pipeline scenarios over in-memory assets

mod relations;

use std::cell::RefCell;
use std::sync::{Arc, Once};

use crate::assets::image_loader::solid_color;
use crate::assets::MemoryAssetStore;
use crate::core::config::MergeConfig;
use crate::render::{MatParamDef, MaterialDef, Texture, VarType};

/// Definition with a float and a color parameter
fn lit_def() -> MaterialDef {
    MaterialDef::new(
        "Lit",
        vec![
            MatParamDef::new("Shininess", VarType::Float),
            MatParamDef::new("Tint", VarType::Color),
            MatParamDef::new("DiffuseMap", VarType::Texture2D),
            MatParamDef::new("NormalMap", VarType::Texture2D),
            MatParamDef::new("Offset", VarType::Vector2),
            MatParamDef::new("Axis", VarType::Vector3),
        ],
    )
}

fn store() -> MemoryAssetStore {
    MemoryAssetStore::new().with_material_def("MatDefs/Lit.ron", lit_def())
}

fn texture(color: [u8; 4]) -> Texture {
    Texture::new_2d(solid_color(2, 2, color))
}

fn config() -> MergeConfig {
    MergeConfig::default()
}

fn shared(store: MemoryAssetStore) -> Arc<MemoryAssetStore> {
    Arc::new(store)
}

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Records log lines per test thread as `LEVEL message`
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|lines| lines.borrow_mut().push(format!("{} {}", record.level(), record.args())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Run `f` and return what it logged on this thread
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });

    CAPTURED.with(|lines| lines.borrow_mut().clear());
    let out = f();
    let lines = CAPTURED.with(|lines| lines.borrow_mut().drain(..).collect());
    (out, lines)
}
