//! Admin surface: login form and the tabbed content dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/admin` shows the dashboard when the session is open and the login form
//! otherwise; `/admin/login` shows the form and moves to `/admin` as soon as
//! the session is open. Both wait for the session to be restored in
//! the browser before rendering either branch.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use content::session::SessionError;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin::benefit_editor::BenefitEditor;
use crate::components::admin::herb_editor::HerbEditor;
use crate::components::admin::home_editor::HomeContentEditor;
use crate::components::admin::magazine_editor::MagazineEditor;
use crate::components::admin::overview::Overview;
use crate::components::admin::recipe_editor::RecipeEditor;
use crate::state::session::{SessionHub, SessionStatus};

/// Dashboard tabs in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Overview,
    Home,
    Herbs,
    Recipes,
    Benefits,
    Magazine,
}

impl AdminTab {
    pub const ALL: [Self; 6] = [Self::Overview, Self::Home, Self::Herbs, Self::Recipes, Self::Benefits, Self::Magazine];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Resumen",
            Self::Home => "Inicio",
            Self::Herbs => "Hierbas",
            Self::Recipes => "Recetas",
            Self::Benefits => "Beneficios",
            Self::Magazine => "Revista",
        }
    }
}

/// Trim the username and require both fields before checking credentials.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Introduce usuario y contraseña.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// User-facing message for a failed login.
pub fn login_error_message(error: &SessionError) -> String {
    match error {
        SessionError::InvalidCredentials => error.to_string(),
        SessionError::Storage(_) => "No se pudo guardar la sesión en este navegador.".to_owned(),
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionHub>();
    let status = session.status();

    view! {
        {move || match status.get() {
            SessionStatus::Unknown => view! { <div class="spinner" aria-label="Cargando"></div> }.into_any(),
            SessionStatus::SignedOut => view! { <LoginForm/> }.into_any(),
            SessionStatus::SignedIn => view! { <Dashboard/> }.into_any(),
        }}
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let status = expect_context::<SessionHub>().status();
    let navigate = use_navigate();

    Effect::new(move || {
        if status.get() == SessionStatus::SignedIn {
            navigate("/admin", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || status.get() != SessionStatus::Unknown
            fallback=|| view! { <div class="spinner" aria-label="Cargando"></div> }
        >
            <LoginForm/>
        </Show>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = expect_context::<SessionHub>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        match session.login(&user, &pass) {
            Ok(()) => {
                error.set(None);
                password.set(String::new());
            }
            Err(e) => {
                log::info!("admin login rejected: {e}");
                error.set(Some(login_error_message(&e)));
            }
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Panel de Administración"</h1>
                <p class="login-card__subtitle">"Natura Revista"</p>
                <label class="field">
                    <span class="field__label">"Usuario"</span>
                    <input
                        class="field__input"
                        type="text"
                        autocomplete="username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Contraseña"</span>
                    <input
                        class="field__input"
                        type="password"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">"Iniciar Sesión"</button>
                <a class="login-card__back" href="/">"‹ Volver al sitio"</a>
            </form>
        </div>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let session = expect_context::<SessionHub>();
    let tab = RwSignal::new(AdminTab::default());

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h1>"Panel de Administración"</h1>
                    <p>"Natura Revista"</p>
                </div>
                <span class="badge">"Administrador"</span>
                <button class="btn btn--danger" type="button" on:click=move |_| session.logout()>
                    "Cerrar Sesión"
                </button>
            </header>
            <nav class="tabs" role="tablist">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == t
                                type="button"
                                role="tab"
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="tabs__content">
                {move || match tab.get() {
                    AdminTab::Overview => view! { <Overview tab=tab/> }.into_any(),
                    AdminTab::Home => view! { <HomeContentEditor/> }.into_any(),
                    AdminTab::Herbs => view! { <HerbEditor/> }.into_any(),
                    AdminTab::Recipes => view! { <RecipeEditor/> }.into_any(),
                    AdminTab::Benefits => view! { <BenefitEditor/> }.into_any(),
                    AdminTab::Magazine => view! { <MagazineEditor/> }.into_any(),
                }}
            </div>
        </div>
    }
}
