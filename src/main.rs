use std::rc::Rc;

mod catalog;
mod components;
mod config;
mod engine;
mod model;
mod progress;
mod state;
#[cfg(test)]
mod test_support;
mod util;

use catalog::LabData;
use components::app::{App, AppProps};
use components::load_error::{LoadError, LoadErrorProps};
use config::LabConfig;

fn main() {
    let config = LabConfig::builtin();
    util::init_logging(
        config
            .as_ref()
            .map(|c| c.log_level)
            .unwrap_or(log::LevelFilter::Info),
    );
    let config = config.unwrap_or_else(|e| {
        log::error!("{e}; using default settings");
        LabConfig::default()
    });

    match LabData::builtin() {
        Ok(data) => {
            yew::Renderer::<App>::with_props(AppProps {
                data: Rc::new(data),
                config: Rc::new(config),
            })
            .render();
        }
        Err(e) => {
            log::error!("{e}");
            yew::Renderer::<LoadError>::with_props(LoadErrorProps {
                message: e.to_string().into(),
            })
            .render();
        }
    }
}
