use super::{
    event_log::{EventLog, EventLogAction, EventLogState},
    label_stage::LabelStage,
    settings_modal::SettingsModal,
};
use pinchable_label::LabelConfig;
use pinchable_label::util::{clog, cwarn};
use yew::prelude::*;

const CONFIG_KEY: &str = "pl_label_config";

fn load_config() -> LabelConfig {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(CONFIG_KEY) {
                match LabelConfig::from_json(&raw) {
                    Ok(config) => return config,
                    Err(err) => cwarn(&format!("ignoring stored config: {}", err)),
                }
            }
        }
    }
    LabelConfig::default()
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(load_config);
    let open_settings = use_state(|| false);
    let log = use_reducer(EventLogState::default);

    // Persist config changes
    {
        use_effect_with(*config, move |config| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    match config.to_json() {
                        Ok(s) => {
                            let _ = store.set_item(CONFIG_KEY, &s);
                            clog(&format!("config saved: {}", s));
                        }
                        Err(err) => cwarn(&format!("config not saved: {}", err)),
                    }
                }
            }
            || ()
        });
    }

    let on_event = {
        let log = log.clone();
        Callback::from(move |line: String| log.dispatch(EventLogAction::Push(line)))
    };
    let on_clear = {
        let log = log.clone();
        Callback::from(move |_| log.dispatch(EventLogAction::Clear))
    };
    let on_change = {
        let config = config.clone();
        Callback::from(move |next: LabelConfig| config.set(next))
    };
    let on_reset = {
        let config = config.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.remove_item(CONFIG_KEY);
                }
            }
            config.set(LabelConfig::default());
        })
    };
    let show_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; color:#e6edf3; font-family:sans-serif;">
            <LabelStage config={*config} on_event={on_event} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
                <button onclick={show_settings}>{"Settings"}</button>
            </div>
            <EventLog entries={log.entries.clone()} on_clear={on_clear} />
            <SettingsModal
                show={*open_settings}
                on_close={close_settings}
                config={*config}
                on_change={on_change}
                on_reset={on_reset}
            />
        </div>
    }
}
