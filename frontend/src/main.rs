//! Browser frontend for the benchboard dashboard.
//!
//! All workflow state lives in `benchboard-core`; this binary implements
//! the `ExperimentsApi` transport over `gloo-net`, holds the store and the
//! creation form in signals, and renders the dashboard.

use benchboard_core::{
    ApiError, CreateExperiment, CreationForm, ExperimentStore, ExperimentsApi, StatusBucket,
};
use chrono::{DateTime, Local};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Experiments API over the browser fetch machinery.
struct HttpApi;

impl ExperimentsApi for HttpApi {
    async fn list_experiments(&self) -> Result<String, ApiError> {
        let resp = gloo_net::http::Request::get("/api/experiments")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }

        resp.text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    async fn create_experiment(&self, req: &CreateExperiment) -> Result<(), ApiError> {
        let resp = gloo_net::http::Request::post("/api/experiments")
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
}

/// Fetch the experiment list and fold the outcome into the store signal.
///
/// The request is awaited outside the signal so the store is never held
/// across the await point; failure handling lives in `apply_refresh`.
async fn refresh_experiments(store: RwSignal<ExperimentStore>) {
    let outcome = HttpApi.list_experiments().await;
    store.update(|s| s.apply_refresh(outcome));
}

fn format_date(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        dt.with_timezone(&Local).format("%H:%M, %d %b, %Y").to_string()
    } else {
        iso.to_string()
    }
}

fn status_chip_class(bucket: StatusBucket) -> &'static str {
    match bucket {
        StatusBucket::Completed => "bg-green-900 text-green-300",
        StatusBucket::Running => "bg-blue-900 text-blue-300",
        StatusBucket::Other => "bg-vscode-border",
    }
}

#[component]
fn App() -> impl IntoView {
    let store = RwSignal::new(ExperimentStore::new());
    let form = RwSignal::new(CreationForm::new());

    // Initial fetch; later refreshes are triggered by successful creates.
    spawn_local(refresh_experiments(store));

    let on_submit = move |_| {
        let payload = form.with(|f| f.payload());
        spawn_local(async move {
            match HttpApi.create_experiment(&payload).await {
                Ok(()) => {
                    form.update(|f| f.complete_submission());
                    refresh_experiments(store).await;
                }
                Err(err) => log::warn!("failed to create experiment: {err}"),
            }
        });
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input = match ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            Some(input) => input,
            None => return,
        };
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };

        let reader_for_onload = reader.clone();
        let onload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if let Some(text) = reader_for_onload.result().ok().and_then(|v| v.as_string()) {
                form.update(|f| f.load_config_file(&text));
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget(); // the browser owns the callback from here on

        if let Err(err) = reader.read_as_text(&file) {
            log::warn!("failed to read config file: {err:?}");
        }
    };

    view! {
        <div class="min-h-screen bg-vscode-bg text-vscode-text flex flex-col">
            // Header
            <header class="h-12 border-b border-vscode-border flex items-center px-4 bg-vscode-sidebar">
                <h1 class="text-sm font-bold tracking-wider uppercase">"VLMHyperBench Dashboard"</h1>
            </header>

            <div class="flex flex-1">
                // Sidebar
                <aside class="w-64 bg-vscode-sidebar border-r border-vscode-border p-4">
                    <button
                        on:click=move |_| form.update(|f| f.open())
                        class="w-full bg-vscode-accent text-white py-2 px-4 rounded text-sm font-medium hover:bg-blue-600 transition-colors"
                    >
                        "New Experiment"
                    </button>
                </aside>

                // Main content
                <main class="flex-1 p-6">
                    <h2 class="text-xl font-semibold mb-6">"Experiments"</h2>
                    {move || {
                        if store.with(|s| s.is_loading()) {
                            view! {
                                <div class="flex items-center justify-center h-64">
                                    <span class="animate-pulse">"Loading core systems..."</span>
                                </div>
                            }.into_any()
                        } else {
                            view! { <ExperimentList store=store /> }.into_any()
                        }
                    }}
                </main>
            </div>

            // Status bar (display only; orchestration lives elsewhere)
            <footer class="h-6 bg-vscode-accent text-white flex items-center px-2 text-[10px] uppercase tracking-tighter">
                <div class="flex gap-4">
                    <span>"Ready"</span>
                    <span>"Docker: Connected"</span>
                    <span>"GPU: 1 Active"</span>
                </div>
            </footer>

            // Creation modal
            {move || form.with(|f| f.is_visible()).then(|| view! {
                <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50">
                    <div class="bg-vscode-sidebar border border-vscode-border rounded-lg w-full max-w-md p-6 shadow-2xl">
                        <h2 class="text-lg font-bold mb-4">"Create New Experiment"</h2>

                        <div class="space-y-4">
                            <div>
                                <label class="block text-xs uppercase opacity-60 mb-1">"Experiment Name"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.name().to_string())
                                    on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                                    class="w-full bg-vscode-bg border border-vscode-border rounded px-3 py-2 text-sm focus:border-vscode-accent outline-none"
                                    placeholder="e.g. SNILS Qwen Test"
                                />
                            </div>

                            <div>
                                <label class="block text-xs uppercase opacity-60 mb-1">"Config File (JSON) or Run Name"</label>
                                <input
                                    type="file"
                                    on:change=on_file_change
                                    class="w-full text-xs text-vscode-text file:mr-4 file:py-2 file:px-4 file:rounded file:border-0 file:text-xs file:font-semibold file:bg-vscode-active file:text-vscode-text hover:file:bg-vscode-border cursor-pointer"
                                />
                                <textarea
                                    prop:value=move || form.with(|f| f.raw_config().to_string())
                                    on:input=move |ev| form.update(|f| f.set_raw_config(event_target_value(&ev)))
                                    class="w-full h-32 mt-2 bg-vscode-bg border border-vscode-border rounded px-3 py-2 text-xs font-mono focus:border-vscode-accent outline-none"
                                    placeholder=r#"{"run_name": "qwen_snils_extraction"}"#
                                ></textarea>
                            </div>
                        </div>

                        <div class="flex justify-end gap-3 mt-6">
                            <button
                                on:click=move |_| form.update(|f| f.cancel())
                                class="px-4 py-2 text-sm hover:bg-vscode-active rounded"
                            >
                                "Cancel"
                            </button>
                            <button
                                on:click=on_submit
                                class="bg-vscode-accent text-white px-4 py-2 rounded text-sm font-medium hover:bg-blue-600"
                            >
                                "Launch"
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn ExperimentList(store: RwSignal<ExperimentStore>) -> impl IntoView {
    view! {
        <div class="grid gap-4">
            {move || {
                let experiments = store.with(|s| s.experiments().to_vec());
                if experiments.is_empty() {
                    view! {
                        <div class="border border-dashed border-vscode-border p-8 text-center rounded">
                            "No experiments found. Start your first VLM benchmark!"
                        </div>
                    }.into_any()
                } else {
                    experiments.into_iter().map(|exp| {
                        let chip = status_chip_class(exp.status_bucket());
                        view! {
                            <div class="bg-vscode-active p-4 rounded border border-vscode-border hover:border-vscode-accent transition-colors">
                                <div class="flex justify-between items-center">
                                    <div>
                                        <h3 class="font-bold">{exp.name}</h3>
                                        <p class="text-xs text-vscode-text/60 mt-1">{format_date(&exp.created_at)}</p>
                                    </div>
                                    <span class=format!("px-2 py-1 rounded text-xs font-mono {}", chip)>
                                        {exp.status}
                                    </span>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}

fn main() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
