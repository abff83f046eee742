use pinchable_label::{EdgeInsets, LabelConfig, Locks};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub config: LabelConfig,
    pub on_change: Callback<LabelConfig>,
    pub on_reset: Callback<()>,
}

fn lock_toggle(
    config: LabelConfig,
    on_change: &Callback<LabelConfig>,
    flip: fn(&mut Locks),
) -> Callback<MouseEvent> {
    let cb = on_change.clone();
    Callback::from(move |_| {
        let mut next = config;
        flip(&mut next.locks);
        cb.emit(next);
    })
}

fn number_input(
    config: LabelConfig,
    on_change: &Callback<LabelConfig>,
    apply: fn(&mut LabelConfig, f64),
) -> Callback<Event> {
    let cb = on_change.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Ok(v) = input.value().parse::<f64>() {
            let mut next = config;
            apply(&mut next, v);
            cb.emit(next);
        }
    })
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let cfg = props.config;

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let unlock_all_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = cfg;
            next.locks.unlock_all();
            cb.emit(next);
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Restore the default label settings?")
                    .unwrap_or(false)
                {
                    cb.emit(());
                }
            } else {
                cb.emit(());
            }
        })
    };

    let toggle_rotate = lock_toggle(cfg, &props.on_change, |l| l.rotate = !l.rotate);
    let toggle_scale = lock_toggle(cfg, &props.on_change, |l| l.scale = !l.scale);
    let toggle_x = lock_toggle(cfg, &props.on_change, |l| l.origin_x = !l.origin_x);
    let toggle_y = lock_toggle(cfg, &props.on_change, |l| l.origin_y = !l.origin_y);

    let min_font = number_input(cfg, &props.on_change, |c, v| c.min_font_size = v);
    let max_font = number_input(cfg, &props.on_change, |c, v| c.max_font_size = v);
    // Shown as an outward margin; stored as a negative (expanding) inset.
    let margin = number_input(cfg, &props.on_change, |c, v| {
        c.tappable_inset = EdgeInsets::uniform(-v)
    });
    let adding_w = number_input(cfg, &props.on_change, |c, v| c.adding_width = v);
    let adding_h = number_input(cfg, &props.on_change, |c, v| c.adding_height = v);

    let row = "display:flex; align-items:center; gap:8px; cursor:pointer;";
    let field = "display:flex; justify-content:space-between; align-items:center; gap:8px;";

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Label Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style={row}>
                    <input type="checkbox" checked={cfg.locks.rotate} onclick={toggle_rotate} />
                    <span>{"Lock Rotation"}</span>
                </label>
                <label style={row}>
                    <input type="checkbox" checked={cfg.locks.scale} onclick={toggle_scale} />
                    <span>{"Lock Scale"}</span>
                </label>
                <label style={row}>
                    <input type="checkbox" checked={cfg.locks.origin_x} onclick={toggle_x} />
                    <span>{"Lock Horizontal Position"}</span>
                </label>
                <label style={row}>
                    <input type="checkbox" checked={cfg.locks.origin_y} onclick={toggle_y} />
                    <span>{"Lock Vertical Position"}</span>
                </label>
                <button onclick={unlock_all_cb} disabled={!cfg.locks.any()}>{"Unlock All"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:8px;">
                <label style={field}>
                    <span>{"Min font size"}</span>
                    <input type="number" value={cfg.min_font_size.to_string()} onchange={min_font} />
                </label>
                <label style={field}>
                    <span>{"Max font size"}</span>
                    <input type="number" value={cfg.max_font_size.to_string()} onchange={max_font} />
                </label>
                <label style={field}>
                    <span>{"Tap margin"}</span>
                    <input type="number" value={(-cfg.tappable_inset.left).to_string()} onchange={margin} />
                </label>
                <label style={field}>
                    <span>{"Extra width"}</span>
                    <input type="number" value={cfg.adding_width.to_string()} onchange={adding_w} />
                </label>
                <label style={field}>
                    <span>{"Extra height"}</span>
                    <input type="number" value={cfg.adding_height.to_string()} onchange={adding_h} />
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Fonts outside the min/max range keep their scale as a visual transform instead of re-rendering."}</div>
        </div>
    </div>}
}
