use chrono::Local;
use gloo_console::error;
use gloo_timers::callback::Timeout;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{self, ApiError, EntryDraft};
use crate::engine;
use crate::model::{Bucket, Category, DateRange, Entry, Filters};
use crate::session;

const CATEGORY_PRESETS: [&str; 6] = ["Food", "Rent", "Shopping", "Bills", "Travel", "Other"];

const DATE_RANGE_CHOICES: [DateRange; 5] = [
    DateRange::All,
    DateRange::LastDays(7),
    DateRange::LastDays(30),
    DateRange::ThisMonth,
    DateRange::ThisYear,
];

fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn format_currency(amount: f64) -> String {
    let paise = (amount * 100.0).round() as i64;
    format!(
        "₹{}.{:02}",
        format_with_commas(paise / 100),
        (paise % 100).abs()
    )
}

fn category_badge(name: &str) -> &'static str {
    match name {
        "Food" => "bg-emerald-100 text-emerald-700 ring-1 ring-emerald-200",
        "Rent" => "bg-blue-100 text-blue-700 ring-1 ring-blue-200",
        "Shopping" => "bg-fuchsia-100 text-fuchsia-700 ring-1 ring-fuchsia-200",
        "Bills" => "bg-amber-100 text-amber-700 ring-1 ring-amber-200",
        _ => "bg-slate-100 text-slate-700 ring-1 ring-slate-200",
    }
}

fn chart_color(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "shopping" => "#e879f9",
        "rent" => "#60a5fa",
        "bills" => "#fb923c",
        "food" => "#f87171",
        "travel" => "#4ade80",
        _ => "#94a3b8",
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |message: &Option<String>| {
                let timer = message
                    .as_ref()
                    .map(|_| Timeout::new(3_000, move || on_close.emit(())));
                move || drop(timer)
            },
            props.message.clone(),
        );
    }

    let Some(message) = props.message.clone() else {
        return html! {};
    };

    html! {
        <div class="fixed bottom-8 left-1/2 -translate-x-1/2 z-50">
            <div class="bg-slate-900 text-white px-6 py-4 rounded-2xl shadow-2xl flex items-center gap-3 border border-slate-700/50 backdrop-blur-md">
                <div class="bg-emerald-500 p-1 rounded-full">{ icon_check() }</div>
                <span class="font-bold tracking-wide text-sm">{ message }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateFilterMenuProps {
    pub value: DateRange,
    pub on_change: Callback<DateRange>,
}

#[function_component(DateFilterMenu)]
pub fn date_filter_menu(props: &DateFilterMenuProps) -> Html {
    let is_open = use_state(|| false);
    let is_active = props.value != DateRange::All;

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    let button_class = if is_active {
        "w-full flex items-center justify-between px-4 py-3 rounded-2xl border bg-emerald-50 border-emerald-200 text-emerald-700 shadow-sm transition-all"
    } else {
        "w-full flex items-center justify-between px-4 py-3 rounded-2xl border bg-slate-50 border-slate-100 text-slate-600 hover:bg-slate-100 transition-all"
    };

    html! {
        <div class="relative">
            <div class="flex items-center justify-between mb-2 px-1">
                <label class="text-[11px] font-black text-slate-400 uppercase tracking-widest">{"Timeline"}</label>
                if is_active {
                    <span class="text-[10px] font-bold text-emerald-600 bg-emerald-100 px-2 py-0.5 rounded-full">{"Active"}</span>
                }
            </div>

            <button type="button" class={button_class} onclick={toggle}>
                <div class="flex items-center gap-3">
                    <span class={if is_active { "p-1.5 rounded-lg bg-emerald-500 text-white" } else { "p-1.5 rounded-lg bg-slate-200 text-slate-500" }}>
                        { icon_calendar() }
                    </span>
                    <span class="font-bold text-sm tracking-tight">{ props.value.label() }</span>
                </div>
                { icon_chevron_down() }
            </button>

            if *is_open {
                <>
                <div class="fixed inset-0 z-20" onclick={close}></div>
                <div class="absolute z-30 w-full mt-2 p-1.5 bg-white border border-slate-100 rounded-2xl shadow-xl shadow-slate-200/60 overflow-hidden">
                    { for DATE_RANGE_CHOICES.iter().map(|range| {
                        let range = *range;
                        let is_selected = range == props.value;
                        let option_class = if is_selected {
                            "w-full flex items-center justify-between px-4 py-2.5 text-sm font-semibold rounded-xl bg-emerald-50 text-emerald-700 transition-all"
                        } else {
                            "w-full flex items-center justify-between px-4 py-2.5 text-sm font-semibold rounded-xl text-slate-500 hover:bg-slate-50 hover:text-slate-900 transition-all"
                        };
                        let on_change = props.on_change.clone();
                        let is_open = is_open.clone();
                        html! {
                            <button type="button" class={option_class} onclick={Callback::from(move |_| {
                                on_change.emit(range);
                                is_open.set(false);
                            })}>
                                { range.label() }
                                if is_selected {
                                    <span class="w-1.5 h-1.5 rounded-full bg-emerald-500"></span>
                                }
                            </button>
                        }
                    }) }
                </div>
                </>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub totals: Vec<(String, f64)>,
}

#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let total: f64 = props.totals.iter().map(|(_, amount)| amount).sum();

    if props.totals.is_empty() || total <= 0.0 {
        return html! {
            <div class="h-64 flex items-center justify-center text-slate-300 font-bold uppercase tracking-widest text-xs border-2 border-dashed border-slate-100 rounded-3xl mt-4">
                {"No Data for Chart"}
            </div>
        };
    }

    let radius = 70.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let mut offset = 0.0;
    let mut slices: Vec<Html> = Vec::new();
    for (name, amount) in props.totals.iter().filter(|(_, amount)| *amount > 0.0) {
        let length = amount / total * circumference;
        slices.push(html! {
            <circle
                cx="96" cy="96" r={radius.to_string()} fill="transparent"
                stroke={chart_color(name)} stroke-width="22"
                stroke-dasharray={format!("{} {}", length, circumference - length)}
                stroke-dashoffset={format!("{}", -offset)}
            />
        });
        offset += length;
    }

    html! {
        <div class="relative h-64 w-full mt-4 flex items-center justify-center">
            <svg width="192" height="192" class="transform -rotate-90">
                { for slices.into_iter() }
            </svg>
            <div class="absolute inset-0 flex flex-col items-center justify-center text-center pointer-events-none">
                <p class="text-[10px] font-bold text-slate-400 uppercase tracking-tighter">{"Total"}</p>
                <p class="text-lg font-black text-slate-800 leading-tight">{ format_currency(total) }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_authenticated: Callback<()>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let is_login = use_state(|| true);
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let is_login = is_login.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let notice = notice.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            error.set(None);
            notice.set(None);
            loading.set(true);

            let is_login_now = *is_login;
            let is_login = is_login.clone();
            let password = password.clone();
            let error = error.clone();
            let notice = notice.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                if is_login_now {
                    match api::login(&email_val, &password_val).await {
                        Ok(token) => {
                            session::store_token(&token);
                            on_authenticated.emit(());
                        }
                        Err(err) => {
                            error!("login failed:", err.to_string());
                            error.set(Some(err.to_string()));
                        }
                    }
                } else {
                    match api::register(&email_val, &password_val).await {
                        Ok(()) => {
                            is_login.set(true);
                            password.set("".to_string());
                            notice.set(Some("Registered successfully. Please login.".to_string()));
                        }
                        Err(err) => {
                            error!("registration failed:", err.to_string());
                            error.set(Some(err.to_string()));
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            is_login.set(!*is_login);
            error.set(None);
            notice.set(None);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-[#f8fafc] text-slate-900 font-sans antialiased">
            <form onsubmit={on_submit} class="bg-white p-8 rounded-3xl shadow-lg border border-slate-200/60 w-full max-w-md space-y-6">
                <div class="text-center mb-2">
                    <h1 class="text-4xl font-extrabold tracking-tight text-indigo-600">
                        {"MyWallet"}<span class="text-indigo-400">{"Pro"}</span>
                    </h1>
                    <p class="text-slate-500 font-medium mt-2 text-sm">
                        { if *is_login { "Welcome back" } else { "Create your account" } }
                    </p>
                </div>

                if let Some(msg) = &*error {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-xl text-sm">{ msg.clone() }</div>
                }
                if let Some(msg) = &*notice {
                    <div class="bg-emerald-50 border border-emerald-200 text-emerald-700 px-4 py-3 rounded-xl text-sm">{ msg.clone() }</div>
                }

                <div>
                    <label class="text-xs font-bold text-slate-500 ml-1 mb-2 block uppercase">{"Email"}</label>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        class="w-full px-4 py-3 border border-slate-200 bg-slate-50/50 rounded-xl focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all"
                        value={(*email).clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            })
                        }}
                    />
                </div>

                <div>
                    <label class="text-xs font-bold text-slate-500 ml-1 mb-2 block uppercase">{"Password"}</label>
                    <input
                        type="password"
                        placeholder="••••••••"
                        class="w-full px-4 py-3 border border-slate-200 bg-slate-50/50 rounded-xl focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all"
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            })
                        }}
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-4 rounded-xl shadow-lg shadow-indigo-200 transition-all active:scale-[0.98]"
                    disabled={*loading}
                >
                    { if *loading { "Please wait..." } else if *is_login { "Login" } else { "Create Account" } }
                </button>

                <p class="text-center text-slate-600">
                    { if *is_login { "Don't have an account? " } else { "Already have an account? " } }
                    <button type="button" onclick={toggle_mode} class="text-indigo-600 font-bold hover:text-indigo-700 transition-colors">
                        { if *is_login { "Register" } else { "Login" } }
                    </button>
                </p>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LedgerPageProps {
    pub on_logout: Callback<()>,
}

#[function_component(LedgerPage)]
pub fn ledger_page(props: &LedgerPageProps) -> Html {
    let entries = use_state(Vec::<Entry>::new);
    let loading = use_state(|| true);
    let filters = use_state(Filters::default);
    let toast = use_state(|| None::<String>);

    let form_title = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_category = use_state(|| "Food".to_string());
    let form_bucket = use_state(Bucket::default);
    let form_date = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let editing_id = use_state(|| None::<i32>);
    let saving = use_state(|| false);

    {
        let entries = entries.clone();
        let loading = loading.clone();
        let on_logout = props.on_logout.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_entries().await {
                        Ok(list) => entries.set(list),
                        Err(ApiError::SessionExpired) => on_logout.emit(()),
                        Err(err) => error!("failed to load entries:", err.to_string()),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let entries = entries.clone();
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_bucket = form_bucket.clone();
        let form_date = form_date.clone();
        let form_error = form_error.clone();
        let editing_id = editing_id.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let title_val = form_title.trim().to_string();
            let amount_val = form_amount.trim().to_string();
            let category_val = form_category.trim().to_string();
            let date_val = form_date.trim().to_string();

            if title_val.is_empty() || amount_val.is_empty() || category_val.is_empty() || date_val.is_empty() {
                form_error.set(Some("Please complete all fields.".to_string()));
                return;
            }

            let amount = match amount_val.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
                _ => {
                    form_error.set(Some("Amount must be a non-negative number.".to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let draft = EntryDraft {
                title: title_val,
                amount,
                category: Category::new(category_val, *form_bucket),
                date: date_val,
            };
            let editing = *editing_id;

            let entries = entries.clone();
            let form_title = form_title.clone();
            let form_amount = form_amount.clone();
            let form_category = form_category.clone();
            let form_bucket = form_bucket.clone();
            let form_date = form_date.clone();
            let form_error = form_error.clone();
            let editing_id = editing_id.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let on_logout = on_logout.clone();
            spawn_local(async move {
                let saved = match editing {
                    Some(id) => api::update_entry(id, &draft).await.map(|_| {
                        let replacement = Entry {
                            id,
                            title: draft.title.clone(),
                            amount: draft.amount,
                            category: draft.category.clone(),
                            date: draft.date.clone(),
                        };
                        let next: Vec<Entry> = entries
                            .iter()
                            .map(|entry| {
                                if entry.id == id {
                                    replacement.clone()
                                } else {
                                    entry.clone()
                                }
                            })
                            .collect();
                        entries.set(next);
                        "Transaction updated."
                    }),
                    None => api::create_entry(&draft).await.map(|created| {
                        let mut next = (*entries).clone();
                        next.insert(0, created);
                        entries.set(next);
                        "Transaction saved."
                    }),
                };

                match saved {
                    Ok(message) => {
                        form_title.set("".to_string());
                        form_amount.set("".to_string());
                        form_category.set("Food".to_string());
                        form_bucket.set(Bucket::default());
                        form_date.set("".to_string());
                        editing_id.set(None);
                        toast.set(Some(message.to_string()));
                    }
                    Err(ApiError::SessionExpired) => on_logout.emit(()),
                    Err(err) => {
                        error!("failed to save entry:", err.to_string());
                        form_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_edit = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_bucket = form_bucket.clone();
        let form_date = form_date.clone();
        let form_error = form_error.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |entry: Entry| {
            editing_id.set(Some(entry.id));
            form_title.set(entry.title.clone());
            form_amount.set(entry.amount.to_string());
            form_category.set(entry.category.name.clone());
            form_bucket.set(entry.category.bucket);
            form_date.set(
                crate::model::entry_day(&entry.date)
                    .map(|day| day.to_string())
                    .unwrap_or_default(),
            );
            form_error.set(None);
        })
    };

    let on_cancel_edit = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_bucket = form_bucket.clone();
        let form_date = form_date.clone();
        let form_error = form_error.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |_| {
            editing_id.set(None);
            form_title.set("".to_string());
            form_amount.set("".to_string());
            form_category.set("Food".to_string());
            form_bucket.set(Bucket::default());
            form_date.set("".to_string());
            form_error.set(None);
        })
    };

    let on_delete = {
        let entries = entries.clone();
        let toast = toast.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |id: i32| {
            let confirmed = web_sys::window()
                .map(|window| window.confirm_with_message("Delete this entry?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let entries = entries.clone();
            let toast = toast.clone();
            let on_logout = on_logout.clone();
            spawn_local(async move {
                match api::delete_entry(id).await {
                    Ok(()) => {
                        let next: Vec<Entry> = entries
                            .iter()
                            .filter(|entry| entry.id != id)
                            .cloned()
                            .collect();
                        entries.set(next);
                        toast.set(Some("Transaction deleted.".to_string()));
                    }
                    Err(ApiError::SessionExpired) => on_logout.emit(()),
                    Err(err) => {
                        error!("failed to delete entry:", err.to_string());
                        toast.set(Some(format!("Could not delete: {}", err)));
                    }
                }
            });
        })
    };

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.search = input.value();
            filters.set(next);
        })
    };

    let on_range_change = {
        let filters = filters.clone();
        Callback::from(move |range: DateRange| {
            let mut next = (*filters).clone();
            next.range = range;
            filters.set(next);
        })
    };

    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    // Everything below is derived from the entry snapshot and the current
    // filter selections; recomputed wholesale on every render.
    let today = Local::now().date_naive();
    let active = (*filters).clone();
    let in_range = engine::entries_in_range(&entries, active.range, today);
    let rows = engine::search_rows(&in_range, &active.search, active.bucket);
    let totals = engine::category_totals(&in_range, active.bucket);
    let balances = engine::bucket_totals(&entries);

    let category_options: Vec<String> = {
        let mut options: Vec<String> = CATEGORY_PRESETS.iter().map(|s| s.to_string()).collect();
        if !form_category.is_empty() && !options.iter().any(|o| o == &*form_category) {
            options.push((*form_category).clone());
        }
        options
    };

    let editing = editing_id.is_some();

    html! {
        <div class="min-h-screen bg-[#f8fafc] text-slate-900 font-sans antialiased selection:bg-indigo-100 selection:text-indigo-900">
            <div class="max-w-6xl mx-auto px-4 py-8 md:px-6 lg:py-12 space-y-10">

                <header class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-6 bg-gradient-to-r from-indigo-600 to-indigo-700 p-8 rounded-3xl shadow-lg">
                    <div>
                        <h1 class="text-4xl font-extrabold tracking-tight text-white">
                            {"MyWallet"}<span class="text-indigo-200">{"Pro"}</span>
                        </h1>
                        <p class="text-indigo-100 font-medium mt-1">{"Simplify your financial life"}</p>
                    </div>

                    <div class="flex items-center w-full sm:w-auto gap-6">
                        { for Bucket::iter().map(|bucket| html! {
                            <div class="flex-1 sm:flex-none text-right">
                                <p class="text-xs uppercase font-bold tracking-widest text-indigo-200 mb-2">{ bucket.to_string() }</p>
                                <p class="text-2xl font-black text-white tabular-nums">{ format_currency(balances.of(bucket)) }</p>
                            </div>
                        }) }

                        <div class="h-12 w-px bg-indigo-400/30 hidden sm:block mx-2"></div>

                        <button
                            onclick={on_logout_click}
                            class="bg-white/20 text-white hover:bg-white/30 px-5 py-2.5 rounded-xl font-semibold transition-all duration-200 border border-white/30 active:scale-95 backdrop-blur-sm"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </header>

                <main class="grid grid-cols-1 lg:grid-cols-12 gap-8">

                    <aside class="lg:col-span-4 space-y-6">
                        <section class="bg-white p-6 rounded-3xl shadow-sm border border-slate-200/60">
                            <h2 class="text-lg font-bold text-slate-800 mb-5 flex items-center gap-2">
                                <span class="w-2 h-2 rounded-full bg-indigo-500"></span>
                                { if editing { "Edit Transaction" } else { "New Transaction" } }
                            </h2>

                            <form onsubmit={on_submit} class="space-y-4">
                                <div>
                                    <label class="text-xs font-bold text-slate-500 ml-1 mb-1 block uppercase">{"Name"}</label>
                                    <input
                                        class="w-full px-4 py-3 rounded-xl border border-slate-200 bg-slate-50/50 focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all"
                                        placeholder="e.g. Ram"
                                        value={(*form_title).clone()}
                                        oninput={{
                                            let form_title = form_title.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                form_title.set(input.value());
                                            })
                                        }}
                                    />
                                </div>

                                <div class="grid grid-cols-2 gap-4">
                                    <div>
                                        <label class="text-xs font-bold text-slate-500 ml-1 mb-1 block uppercase">{"Amount"}</label>
                                        <input
                                            type="number"
                                            step="0.01"
                                            min="0"
                                            class="w-full px-4 py-3 rounded-xl border border-slate-200 bg-slate-50/50 focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all"
                                            placeholder="0.00"
                                            value={(*form_amount).clone()}
                                            oninput={{
                                                let form_amount = form_amount.clone();
                                                Callback::from(move |e: InputEvent| {
                                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                    form_amount.set(input.value());
                                                })
                                            }}
                                        />
                                    </div>
                                    <div>
                                        <label class="text-xs font-bold text-slate-500 ml-1 mb-1 block uppercase">{"Date"}</label>
                                        <input
                                            type="date"
                                            class="w-full px-4 py-3 rounded-xl border border-slate-200 bg-slate-50/50 focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all"
                                            value={(*form_date).clone()}
                                            oninput={{
                                                let form_date = form_date.clone();
                                                Callback::from(move |e: InputEvent| {
                                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                    form_date.set(input.value());
                                                })
                                            }}
                                        />
                                    </div>
                                </div>

                                <div class="grid grid-cols-2 gap-4">
                                    <div>
                                        <label class="text-xs font-bold text-slate-500 ml-1 mb-1 block uppercase">{"Category"}</label>
                                        <select
                                            class="w-full px-4 py-3 rounded-xl border border-slate-200 bg-slate-50/50 focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all appearance-none cursor-pointer"
                                            value={(*form_category).clone()}
                                            onchange={{
                                                let form_category = form_category.clone();
                                                Callback::from(move |e: Event| {
                                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                    form_category.set(select.value());
                                                })
                                            }}
                                        >
                                            { for category_options.iter().map(|name| html! {
                                                <option value={name.clone()}>{ name.clone() }</option>
                                            }) }
                                        </select>
                                    </div>
                                    <div>
                                        <label class="text-xs font-bold text-slate-500 ml-1 mb-1 block uppercase">{"Account"}</label>
                                        <select
                                            class="w-full px-4 py-3 rounded-xl border border-slate-200 bg-slate-50/50 focus:bg-white focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all appearance-none cursor-pointer"
                                            value={form_bucket.to_string()}
                                            onchange={{
                                                let form_bucket = form_bucket.clone();
                                                Callback::from(move |e: Event| {
                                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                    form_bucket.set(select.value().parse().unwrap_or_default());
                                                })
                                            }}
                                        >
                                            { for Bucket::iter().map(|bucket| html! {
                                                <option value={bucket.to_string()}>{ bucket.to_string() }</option>
                                            }) }
                                        </select>
                                    </div>
                                </div>

                                if let Some(msg) = &*form_error {
                                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                                }

                                <button
                                    type="submit"
                                    class="w-full py-4 rounded-xl bg-indigo-600 text-white font-bold text-lg hover:bg-indigo-700 shadow-lg shadow-indigo-200 transition-all active:scale-[0.98] mt-2"
                                    disabled={*saving}
                                >
                                    { if *saving { "Saving..." } else if editing { "Save Changes" } else { "Add Expense" } }
                                </button>
                                if editing {
                                    <button
                                        type="button"
                                        onclick={on_cancel_edit}
                                        class="w-full text-slate-500 font-semibold text-sm hover:underline"
                                    >
                                        {"Cancel Edit"}
                                    </button>
                                }
                            </form>
                        </section>

                        <section class="bg-white p-6 rounded-3xl shadow-sm border border-slate-200/60">
                            <h2 class="text-lg font-bold text-slate-800 mb-5">{"Category Summary"}</h2>
                            <div class="space-y-3">
                                { if totals.is_empty() {
                                    html! { <p class="text-sm text-slate-400 text-center py-4 italic">{"No data yet"}</p> }
                                } else {
                                    html! {
                                        <>
                                            { for totals.iter().map(|(name, amount)| html! {
                                                <div key={name.clone()} class="flex justify-between items-center p-3 rounded-2xl hover:bg-slate-50 transition-colors">
                                                    <span class={format!("text-[11px] px-3 py-1.5 rounded-lg font-bold uppercase tracking-wider {}", category_badge(name))}>
                                                        { name.clone() }
                                                    </span>
                                                    <span class="font-bold text-slate-700 tabular-nums">{ format_currency(*amount) }</span>
                                                </div>
                                            }) }
                                        </>
                                    }
                                }}
                            </div>
                            <CategoryChart totals={totals.clone()} />
                        </section>
                    </aside>

                    <div class="lg:col-span-8 space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 items-end">
                            <div class="relative group">
                                <div class="absolute inset-y-0 left-0 pl-5 flex items-center pointer-events-none">
                                    { icon_search() }
                                </div>
                                <input
                                    class="w-full pl-12 pr-6 py-4 rounded-2xl border border-slate-200 bg-white shadow-sm focus:ring-4 focus:ring-indigo-500/10 focus:border-indigo-500 outline-none transition-all text-lg"
                                    placeholder="Search by transaction name..."
                                    value={active.search.clone()}
                                    oninput={on_search}
                                />
                            </div>
                            <DateFilterMenu value={active.range} on_change={on_range_change} />
                        </div>

                        <div class="flex gap-2 p-1.5 bg-slate-100 rounded-2xl w-fit">
                            { for Bucket::iter().map(|bucket| {
                                let is_active = bucket == active.bucket;
                                let tab_class = if is_active {
                                    "px-5 py-2 rounded-xl text-sm font-bold bg-white text-indigo-700 shadow-sm transition-all"
                                } else {
                                    "px-5 py-2 rounded-xl text-sm font-bold text-slate-500 hover:text-slate-800 transition-all"
                                };
                                let filters = filters.clone();
                                html! {
                                    <button type="button" class={tab_class} onclick={Callback::from(move |_| {
                                        let mut next = (*filters).clone();
                                        next.bucket = bucket;
                                        filters.set(next);
                                    })}>
                                        { bucket.to_string() }
                                    </button>
                                }
                            }) }
                        </div>

                        <div class="bg-white rounded-3xl shadow-sm border border-slate-200/60 overflow-hidden">
                            <div class="overflow-x-auto">
                                <table class="w-full text-left">
                                    <thead>
                                        <tr class="bg-slate-50/50 border-b border-slate-100">
                                            <th class="px-6 py-5 text-xs font-bold uppercase tracking-wider text-slate-500">{"Name"}</th>
                                            <th class="px-6 py-5 text-xs font-bold uppercase tracking-wider text-slate-500">{"Category"}</th>
                                            <th class="px-6 py-5 text-xs font-bold uppercase tracking-wider text-slate-500">{"Date"}</th>
                                            <th class="px-6 py-5 text-xs font-bold uppercase tracking-wider text-slate-500 text-right">{"Amount"}</th>
                                            <th class="px-6 py-5 text-xs font-bold uppercase tracking-wider text-slate-500 text-center">{"Actions"}</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-slate-50">
                                        { for rows.iter().map(|entry| {
                                            let on_edit = on_edit.clone();
                                            let on_delete = on_delete.clone();
                                            let edit_target = entry.clone();
                                            let id = entry.id;
                                            html! {
                                                <tr key={entry.id} class="hover:bg-indigo-50/30 transition-colors group">
                                                    <td class="px-6 py-5">
                                                        <p class="font-semibold text-slate-700">{ entry.title.clone() }</p>
                                                    </td>
                                                    <td class="px-6 py-5">
                                                        <span class={format!("text-[10px] px-2.5 py-1 rounded-md font-bold uppercase {}", category_badge(&entry.category.name))}>
                                                            { entry.category.name.clone() }
                                                        </span>
                                                    </td>
                                                    <td class="px-6 py-5 text-slate-500 text-sm">
                                                        { crate::model::entry_day(&entry.date).map(|day| day.to_string()).unwrap_or_else(|| "—".to_string()) }
                                                    </td>
                                                    <td class="px-6 py-5 text-right">
                                                        <p class="font-bold text-slate-900 tabular-nums">{ format_currency(entry.amount) }</p>
                                                    </td>
                                                    <td class="px-6 py-5 text-center">
                                                        <div class="flex justify-center gap-3">
                                                            <button
                                                                title="Edit"
                                                                class="p-2 text-indigo-500 hover:bg-indigo-100 rounded-lg transition-colors"
                                                                onclick={Callback::from(move |_| on_edit.emit(edit_target.clone()))}
                                                            >
                                                                { icon_edit() }
                                                            </button>
                                                            <button
                                                                title="Delete"
                                                                class="p-2 text-red-400 hover:bg-red-50 hover:text-red-600 rounded-lg transition-colors"
                                                                onclick={Callback::from(move |_| on_delete.emit(id))}
                                                            >
                                                                { icon_trash() }
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }) }
                                    </tbody>
                                </table>
                            </div>

                            { if *loading {
                                html! {
                                    <div class="py-20 text-center text-slate-400">{"Loading..."}</div>
                                }
                            } else if rows.is_empty() {
                                html! {
                                    <div class="py-20 text-center">
                                        <div class="bg-slate-100 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4">
                                            { icon_wallet() }
                                        </div>
                                        <h3 class="text-slate-900 font-bold">{"No entries found"}</h3>
                                        <p class="text-slate-500 text-sm">{"Try adjusting your search or add a new expense."}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    </div>
                </main>
            </div>

            <Toast message={(*toast).clone()} on_close={on_toast_close} />
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_search() -> Html {
    icon_base("M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z")
}
fn icon_edit() -> Html {
    icon_base("M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z")
}
fn icon_trash() -> Html {
    icon_base("M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16")
}
fn icon_check() -> Html {
    icon_base("M5 13l4 4L19 7")
}
fn icon_calendar() -> Html {
    icon_base("M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z")
}
fn icon_chevron_down() -> Html {
    icon_base("M6 9l6 6 6-6")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
