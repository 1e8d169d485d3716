pub mod runner;
pub mod scroll;

pub use runner::AppRunner;
pub use scroll::ScrollObserver;

/// Generate all `#[wasm_bindgen]` exports for a scene app.
///
/// This macro eliminates ~200 lines of boilerplate per scene crate by generating:
/// - `thread_local!` storage for the AppRunner and the scroll observer
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use helio_engine::*;
///
/// mod scene_app;
/// use scene_app::MyScene;
///
/// helio_web::export_app!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `helio_engine::App`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
            static SCROLL: RefCell<Option<$crate::ScrollObserver>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn app_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn app_scroll(progress: f32) {
            with_runner(|r| r.push_input(InputEvent::Scroll { progress }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Attach the window scroll listener. Scroll progress flows into
        /// the input queue from here on.
        #[wasm_bindgen]
        pub fn app_attach_scroll() {
            let observer = $crate::ScrollObserver::attach(|progress| {
                with_runner(|r| r.push_input(InputEvent::Scroll { progress }));
            });
            match observer {
                Ok(obs) => SCROLL.with(|cell| {
                    *cell.borrow_mut() = Some(obs);
                }),
                Err(err) => log::error!("scroll observer attach failed: {:?}", err),
            }
        }

        #[wasm_bindgen]
        pub fn app_detach_scroll() {
            SCROLL.with(|cell| {
                *cell.borrow_mut() = None;
            });
        }

        #[wasm_bindgen]
        pub fn get_label_manifest() -> String {
            with_runner(|r| r.label_manifest())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_params_ptr() -> *const f32 {
            with_runner(|r| r.frame_params_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_instances_ptr() -> *const f32 {
            with_runner(|r| r.sphere_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_count() -> u32 {
            with_runner(|r| r.sphere_count())
        }

        #[wasm_bindgen]
        pub fn get_ring_instances_ptr() -> *const f32 {
            with_runner(|r| r.ring_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ring_count() -> u32 {
            with_runner(|r| r.ring_count())
        }

        #[wasm_bindgen]
        pub fn get_label_instances_ptr() -> *const f32 {
            with_runner(|r| r.label_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_label_count() -> u32 {
            with_runner(|r| r.label_count())
        }

        #[wasm_bindgen]
        pub fn get_host_events_ptr() -> *const f32 {
            with_runner(|r| r.host_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_host_events_len() -> u32 {
            with_runner(|r| r.host_events_len())
        }

        #[wasm_bindgen]
        pub fn get_star_points_ptr() -> *const f32 {
            with_runner(|r| r.star_points_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_point_count() -> u32 {
            with_runner(|r| r.star_point_count())
        }

        #[wasm_bindgen]
        pub fn get_dust_points_ptr() -> *const f32 {
            with_runner(|r| r.dust_points_ptr())
        }

        #[wasm_bindgen]
        pub fn get_dust_point_count() -> u32 {
            with_runner(|r| r.dust_point_count())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_intensity() -> f32 {
            with_runner(|r| r.ambient_intensity())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_rings() -> u32 {
            with_runner(|r| r.max_rings())
        }

        #[wasm_bindgen]
        pub fn get_max_labels() -> u32 {
            with_runner(|r| r.max_labels())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
