//! Horizontal drag slider for one execution percentage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes go straight into `ProjectDetailState.execution`; the page is told
//! about each value change through `on_change` so it can re-arm autosave.
//! Pointer capture keeps the drag alive when the pointer leaves the track.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::state::execution::Gauge;
use crate::state::project::ProjectDetailState;

#[component]
pub fn ExecutionSlider(gauge: Gauge, state: RwSignal<ProjectDetailState>, on_change: Callback<()>) -> impl IntoView {
    let track_ref = NodeRef::<leptos::html::Div>::new();

    let value = move || state.with(|s| s.execution.value(gauge));
    let enabled = move || state.with(|s| s.execution.can_drag());
    let fill_style = move || format!("width: {}%;", value());

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let mut started = false;
        state.update(|s| started = s.execution.begin_drag(gauge));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
            if let Some(track) = track_ref.get_untracked() {
                let percent = crate::util::slider::percent_for_event(&track, &ev);
                let mut changed = false;
                state.update(|s| changed = s.execution.drag_to(percent));
                if changed {
                    on_change.run(());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if state.with_untracked(|s| s.execution.dragging) != Some(gauge) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(track) = track_ref.get_untracked() {
                let percent = crate::util::slider::percent_for_event(&track, &ev);
                let mut changed = false;
                state.update(|s| changed = s.execution.drag_to(percent));
                if changed {
                    on_change.run(());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        if state.with_untracked(|s| s.execution.dragging) == Some(gauge) {
            state.update(|s| s.execution.end_drag());
        }
    };

    view! {
        <div class="execution-slider" class:execution-slider--disabled=move || !enabled()>
            <div class="execution-slider__header">
                <span class="execution-slider__label">{gauge.label()}</span>
                <span class="execution-slider__value">{move || format!("{}%", value())}</span>
            </div>
            <div
                class="execution-slider__track"
                node_ref=track_ref
                role="slider"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || value().to_string()
                aria-disabled=move || (!enabled()).to_string()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
            >
                <div class="execution-slider__fill" style=fill_style></div>
            </div>
        </div>
    }
}
