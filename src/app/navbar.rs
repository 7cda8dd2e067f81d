use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::nav::NavController;
use crate::theme::NavTone;

use super::cards::Button;

/// Renders from a controller owned by the page; only the toggle and link clicks reach back into it.
#[component]
pub fn NavBar(catalog: &'static Catalog, controller: NavController) -> impl IntoView {
    let state = controller.state();
    let tone = Memo::new(move |_| NavTone::from(state.get()));
    let profile = &catalog.profile;
    let mailto = profile.mailto();
    let desktop_mailto = mailto.clone();

    view! {
        <nav class=move || tone.get().bar_class()>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <a href="#" class=move || tone.get().brand_class()>
                    {profile.first_name.clone()}
                    <span class="text-blue-600 font-extrabold">{profile.last_name.clone()}</span>
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {catalog
                        .nav_links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    class=move || tone.get().link_class()
                                    on:click=move |_| controller.select_link()
                                >
                                    {link.name.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                    {move || {
                        let tone = tone.get();
                        view! {
                            <Button
                                variant=tone.contact_variant()
                                class=tone.contact_extra()
                                href=desktop_mailto.clone()
                            >
                                "Contact Me"
                            </Button>
                        }
                    }}
                </div>

                <button
                    type="button"
                    class=move || tone.get().toggle_class()
                    aria-label="Toggle menu"
                    aria-expanded=move || {
                        if state.get().menu_open() { "true" } else { "false" }
                    }
                    on:click=move |_| controller.toggle_menu()
                >
                    {move || if state.get().menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            {move || {
                if !state.get().menu_open() {
                    return None;
                }
                Some(
                    view! {
                        <div class="md:hidden absolute top-full left-0 w-full bg-white border-t border-slate-100 shadow-xl py-4 px-6 flex flex-col space-y-4">
                            {catalog
                                .nav_links
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href.clone()
                                            class="text-lg font-medium text-slate-900"
                                            on:click=move |_| controller.select_link()
                                        >
                                            {link.name.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <hr class="border-slate-100" />
                            <a
                                href=mailto.clone()
                                class="text-blue-600 font-semibold"
                                on:click=move |_| controller.select_link()
                            >
                                "Contact Me"
                            </a>
                        </div>
                    },
                )
            }}
        </nav>
    }
}
