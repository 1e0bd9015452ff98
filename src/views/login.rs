// ============================================================================
// LOGIN VIEW - Username / password form
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, event_value, on_input, on_submit, ElementBuilder};
use crate::models::auth::Credentials;
use crate::state::{AdminState, SessionPhase};
use crate::views::PanelViewModel;

pub fn render_login(vm: &PanelViewModel, phase: SessionPhase) -> Result<Element, JsValue> {
    let credentials = vm.state.credentials();
    // Only a submitted sign-in locks the form; a cookie check in the background does not
    let busy = phase == SessionPhase::Authenticating;

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(ElementBuilder::new("h1")?.text("Sign in").build())?
        .child(render_field(&vm.state, "username", "Email", "email", &credentials.username, |c, v| {
            c.username = v
        })?)?
        .child(render_field(&vm.state, "password", "Password", "password", &credentials.password, |c, v| {
            c.password = v
        })?)?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-primary")
                .attr("type", "submit")?
                .flag("disabled", busy)?
                .text(if busy { "Signing in..." } else { "Sign in" })
                .build(),
        )?
        .build();
    if phase == SessionPhase::Revalidating {
        append_child(
            &form,
            &ElementBuilder::new("p")?.class("text-muted").text("Checking saved session...").build(),
        )?;
    }

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let credentials = vm.state.credentials();
            spawn_local(async move {
                // Failures are already on the banner
                if let Err(e) = vm.session.sign_in(credentials).await {
                    log::debug!("🔐 [LOGIN] {}", e);
                }
            });
        });
    }

    Ok(ElementBuilder::new("div")?.class("login-screen").child(form)?.build())
}

fn render_field(
    state: &AdminState,
    id: &str,
    label: &str,
    input_type: &str,
    value: &str,
    update: fn(&mut Credentials, String),
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .attr("id", id)?
        .attr("type", input_type)?
        .attr("value", value)?
        .flag("required", true)?
        .build();

    {
        let state = state.clone();
        on_input(&input, move |event| {
            if let Some(value) = event_value(&event) {
                update(&mut state.login_form.borrow_mut(), value);
            }
        });
    }

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(input)?
        .build())
}
