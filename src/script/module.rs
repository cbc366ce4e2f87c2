//! The `livelink` script module
//!
//! ```text
//! livelink::add_stream_object("Camera001");     // true
//! livelink::remove_stream_object("Camera001");  // true
//! livelink::get_stream_objects();               // ["..."]
//! ```

use std::rc::Rc;

use rhai::module_resolvers::StaticModuleResolver;
use rhai::{Array, Dynamic, Engine, EvalAltResult, ImmutableString, Module};

use crate::control::ControlSurface;
use crate::error::BridgeError;

use super::error::into_script_error;

/// Build the module exposing the control surface
pub fn build_module(surface: &Rc<ControlSurface>) -> Module {
    let mut module = Module::new();

    let add = Rc::clone(surface);
    module.set_native_fn(
        "add_stream_object",
        move |model_name: Dynamic| -> Result<bool, Box<EvalAltResult>> {
            add.check_device().map_err(into_script_error)?;
            let model_name = expect_model_name(model_name)?;
            add.add_stream_object(model_name.as_str())
                .map_err(into_script_error)
        },
    );

    let remove = Rc::clone(surface);
    module.set_native_fn(
        "remove_stream_object",
        move |model_name: Dynamic| -> Result<bool, Box<EvalAltResult>> {
            remove.check_device().map_err(into_script_error)?;
            let model_name = expect_model_name(model_name)?;
            remove
                .remove_stream_object(model_name.as_str())
                .map_err(into_script_error)
        },
    );

    let list = Rc::clone(surface);
    module.set_native_fn(
        "get_stream_objects",
        move || -> Result<Array, Box<EvalAltResult>> {
            let names = list.stream_objects().map_err(into_script_error)?;
            Ok(names.into_iter().map(Dynamic::from).collect())
        },
    );

    module
}

/// Install the module on an engine
///
/// The module is reachable both as a static namespace (`livelink::...`) and
/// through `import "livelink" as ll;`. This replaces the engine's module
/// resolver.
pub fn register_livelink_module(engine: &mut Engine, surface: &Rc<ControlSurface>) {
    let name = surface.config().module_name.clone();
    let module = build_module(surface);

    let mut resolver = StaticModuleResolver::new();
    resolver.insert(name.as_str(), module.clone());
    engine.set_module_resolver(resolver);

    engine.register_static_module(name.as_str(), module.into());

    tracing::debug!(module = %name, "Script module registered");
}

fn expect_model_name(value: Dynamic) -> Result<ImmutableString, Box<EvalAltResult>> {
    value
        .into_immutable_string()
        .map_err(|_| into_script_error(BridgeError::BadArgument))
}
