use wasm_bindgen::prelude::*;

use helio_engine::*;

pub mod planets;
mod scene_app;

use scene_app::PortfolioScene;

helio_web::export_app!(PortfolioScene, "gariban-scene");
