use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use pinchable_label::hit_test::tappable_rect;
use pinchable_label::util::{clog, format_scale};
use pinchable_label::{
    AttributedText, GesturePhase, LabelConfig, MonospaceMeasurer, ParentPoint, PinchableLabel,
    Touch,
};

use super::canvas_measurer::CanvasMeasurer;

const FONT_FAMILY: &str = "-apple-system, Helvetica, Arial, sans-serif";

#[derive(Properties, PartialEq, Clone)]
pub struct LabelStageProps {
    pub config: LabelConfig,
    pub on_event: Callback<String>,
}

/// Touches changed by `e`, located relative to the stage.
fn changed_touches(e: &TouchEvent, stage: &HtmlElement) -> Vec<Touch> {
    let rect = stage.get_bounding_client_rect();
    let list = e.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            Touch::new(
                t.identifier() as u32 as u64,
                t.client_x() as f64 - rect.left(),
                t.client_y() as f64 - rect.top(),
            )
        })
        .collect()
}

fn create_label(stage: &HtmlElement, config: LabelConfig) -> PinchableLabel {
    let center = ParentPoint::new(
        stage.client_width() as f64 / 2.0,
        stage.client_height() as f64 / 2.0,
    );
    let text = AttributedText::new("Label", 36.0);
    let label = PinchableLabel::new(text, center, MonospaceMeasurer::default());
    let mut label = label.with_config(config);
    match CanvasMeasurer::new(FONT_FAMILY) {
        Some(m) => {
            label.set_measurer(m);
            label.size_fit_to_text();
        }
        None => clog("no 2d canvas for text metrics, using monospace estimate"),
    }
    label
}

fn render_label(label: &PinchableLabel) -> Html {
    let frame = label.frame();
    let t = frame.transform;
    let style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; transform:matrix({},{},{},{},0,0); \
         white-space:pre; color:#e6edf3; font-family:{}; line-height:{}px; pointer-events:none;",
        frame.center.x - frame.size.width / 2.0,
        frame.center.y - frame.size.height / 2.0,
        frame.size.width,
        frame.size.height,
        t.m11,
        t.m12,
        t.m21,
        t.m22,
        FONT_FAMILY,
        frame.size.height,
    );
    let tap = tappable_rect(frame.bounds(), &label.config.tappable_inset, label.end_scale());
    let tap_style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; border:1px dashed rgba(88,166,255,0.35); box-sizing:border-box;",
        tap.origin.x,
        tap.origin.y,
        tap.size.width.max(0.0),
        tap.size.height.max(0.0),
    );
    html! {
        <div style={style}>
            <div style={tap_style}></div>
            { for label.text().runs.iter().map(|run| {
                let run_style = format!("font-size:{}px; letter-spacing:{}px;", run.font_size, run.kern);
                html! { <span style={run_style}>{ run.text.clone() }</span> }
            }) }
        </div>
    }
}

#[function_component(LabelStage)]
pub fn label_stage(props: &LabelStageProps) -> Html {
    let stage_ref = use_node_ref();
    let label = use_mut_ref(|| None::<PinchableLabel>);
    let force_update = use_force_update();

    // Effect: keep the label's config in sync with the settings
    {
        let label = label.clone();
        let force_update = force_update.clone();
        use_effect_with(props.config, move |config| {
            if let Some(l) = label.borrow_mut().as_mut() {
                l.config = *config;
                l.size_fit_to_text();
            }
            force_update.force_update();
            || ()
        });
    }

    {
        let stage_ref = stage_ref.clone();
        let label = label.clone();
        let force_update = force_update.clone();
        let config = props.config;
        let on_event = props.on_event.clone();

        use_effect_with((), move |_| {
            let stage: HtmlElement = stage_ref
                .cast::<HtmlElement>()
                .expect("stage_ref not attached to an element");

            {
                let mut created = create_label(&stage, config);
                created.add_observer(
                    move |l: &PinchableLabel, phase: GesturePhase, touches: &[Touch]| {
                        if phase == GesturePhase::Moved {
                            return;
                        }
                        let at = String::from(js_sys::Date::new_0().to_locale_time_string("en-US"));
                        let line = format!(
                            "{} {:?} {} touch(es), font {:.1}, scale {}",
                            at,
                            phase,
                            touches.len(),
                            l.font_size(),
                            format_scale(l.frame().visual_scale()),
                        );
                        clog(&line);
                        on_event.emit(line);
                    },
                );
                *label.borrow_mut() = Some(created);
            }
            force_update.force_update();

            let touch_start_cb = {
                let stage_tc = stage.clone();
                let label_tc = label.clone();
                let force_update = force_update.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = changed_touches(&e, &stage_tc);
                    let mut guard = label_tc.borrow_mut();
                    if let Some(l) = guard.as_mut() {
                        let captured: Vec<Touch> = touches
                            .into_iter()
                            .filter(|t| l.point_inside(l.location_in_label(t)))
                            .collect();
                        if !captured.is_empty() {
                            l.touches_began(&captured);
                            e.prevent_default();
                        }
                    }
                    drop(guard);
                    force_update.force_update();
                }) as Box<dyn FnMut(_)>)
            };
            stage
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_move_cb = {
                let stage_tc = stage.clone();
                let label_tc = label.clone();
                let force_update = force_update.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let mut guard = label_tc.borrow_mut();
                    if let Some(l) = guard.as_mut() {
                        let tracked: Vec<Touch> = changed_touches(&e, &stage_tc)
                            .into_iter()
                            .filter(|t| l.is_tracking(t.id))
                            .collect();
                        if !tracked.is_empty() {
                            l.touches_moved(&tracked);
                        }
                    }
                    drop(guard);
                    force_update.force_update();
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            stage
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_end_cb = {
                let stage_tc = stage.clone();
                let label_tc = label.clone();
                let force_update = force_update.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let mut guard = label_tc.borrow_mut();
                    if let Some(l) = guard.as_mut() {
                        let tracked: Vec<Touch> = changed_touches(&e, &stage_tc)
                            .into_iter()
                            .filter(|t| l.is_tracking(t.id))
                            .collect();
                        if !tracked.is_empty() {
                            if e.type_() == "touchcancel" {
                                l.touches_cancelled(&tracked);
                            } else {
                                l.touches_ended(&tracked);
                            }
                        }
                    }
                    drop(guard);
                    force_update.force_update();
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            stage
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            stage
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            // Cleanup
            move || {
                let _ = stage.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = stage.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = stage.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = stage.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb);
            }
        });
    }

    let (body, status) = match &*label.borrow() {
        Some(l) => (
            render_label(l),
            format!(
                "font {:.1}  scale {}  touches {}",
                l.font_size(),
                format_scale(l.end_scale()),
                l.active_touch_count()
            ),
        ),
        None => (html! {}, String::new()),
    };

    html! {
        <div ref={stage_ref} style="position:absolute; inset:0; overflow:hidden; touch-action:none; background:#0e1116;">
            { body }
            <div style="position:absolute; left:12px; bottom:12px; font-size:12px; opacity:0.7; font-family:monospace;">{ status }</div>
        </div>
    }
}
