use std::rc::Rc;
use yew::prelude::*;

const MAX_ENTRIES: usize = 40;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLogState {
    pub entries: Vec<String>,
}

pub enum EventLogAction {
    Push(String),
    Clear,
}

impl Reducible for EventLogState {
    type Action = EventLogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EventLogAction::Push(line) => {
                next.entries.push(line);
                if next.entries.len() > MAX_ENTRIES {
                    let overflow = next.entries.len() - MAX_ENTRIES;
                    next.entries.drain(..overflow);
                }
            }
            EventLogAction::Clear => next.entries.clear(),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventLogProps {
    pub entries: Vec<String>,
    pub on_clear: Callback<()>,
}

#[function_component(EventLog)]
pub fn event_log(props: &EventLogProps) -> Html {
    let clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; right:12px; bottom:12px; width:260px; max-height:40vh; overflow-y:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; font-size:11px; font-family:monospace;">
        <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:6px;">
            <span style="opacity:0.7;">{"Gesture events"}</span>
            <button onclick={clear} style="padding:2px 6px;">{"Clear"}</button>
        </div>
        { for props.entries.iter().rev().take(12).map(|e| html! { <div>{ e.clone() }</div> }) }
    </div>}
}
