/// Popup UI for Tab Grouper

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use patternfly_yew::prelude::*;
use crate::message::Action;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn sendAction(message: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

fn button_label(action: Action) -> &'static str {
    match action {
        Action::GroupAll => "Group All Tabs",
        Action::SortGroups => "Sort Groups A-Z",
        Action::SortTabs => "Sort Tabs in Groups",
        Action::CollapseAll => "Collapse All Groups",
        Action::ExpandAll => "Expand All Groups",
    }
}

fn progress_label(action: Action) -> &'static str {
    match action {
        Action::GroupAll => "Grouping tabs...",
        Action::SortGroups => "Sorting groups...",
        Action::SortTabs => "Sorting tabs...",
        Action::CollapseAll => "Collapsing groups...",
        Action::ExpandAll => "Expanding groups...",
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Idle);

    let on_action = {
        let state = state.clone();
        move |action: Action| {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| {
                let state = state.clone();
                state.set(AppState::Loading(progress_label(action).to_string()));

                spawn_local(async move {
                    match send_action(action).await {
                        Ok(_) => state.set(AppState::Idle),
                        Err(e) => state.set(AppState::Error(e)),
                    }
                });
            })
        }
    };

    let is_busy = !matches!(*state, AppState::Idle);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Grouper"}</h1>

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            <div class="flex-column-gap">
                {for Action::ALL.into_iter().map(|action| html! {
                    <Button onclick={on_action(action)} disabled={is_busy} variant={ButtonVariant::Secondary} block={true}>
                        {button_label(action)}
                    </Button>
                })}
            </div>

            <p class="footer-popup">
                {"Tab Grouper v0.1.0"}
            </p>
        </div>
    }
}

async fn send_action(action: Action) -> Result<(), String> {
    let message_js = serde_wasm_bindgen::to_value(&action.message())
        .map_err(|e| format!("Failed to serialize: {:?}", e))?;

    sendAction(message_js)
        .await
        .map_err(|e| format!("{} failed: {:?}", action.name(), e))?;

    Ok(())
}
