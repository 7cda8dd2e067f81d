use leptos::{either::Either, prelude::*};

use crate::catalog::{catalog, Catalog, Icon, Section};
use crate::nav::{NavController, WindowScroll};
use crate::theme::ButtonVariant;

use super::cards::{
    Button, ExperienceItem, IconGlyph, ProjectCard, SectionHeading, ServiceCard,
};
use super::navbar::NavBar;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn HomePage() -> impl IntoView {
    match catalog() {
        Ok(catalog) => Either::Left(view! { <Page catalog /> }),
        Err(_) => Either::Right(view! {
            <p class="p-8 text-center text-slate-600">"Site content is unavailable."</p>
        }),
    }
}

#[component]
fn Page(catalog: &'static Catalog) -> impl IntoView {
    let controller = NavController::mount(&WindowScroll);
    view! {
        <div class="min-h-screen bg-white font-sans text-slate-900 selection:bg-blue-100">
            <NavBar catalog controller />
            <Hero catalog />
            <AboutSection catalog />
            <ServicesSection catalog />
            <ExperienceSection catalog />
            <PortfolioSection catalog />
            <ContactFooter catalog />
        </div>
    }
}

#[component]
fn Hero(catalog: &'static Catalog) -> impl IntoView {
    let hero = &catalog.hero;
    view! {
        <section class="relative pt-32 pb-20 lg:pt-48 lg:pb-32 bg-slate-900 overflow-hidden">
            <div class="absolute top-0 right-0 w-1/2 h-full bg-gradient-to-bl from-blue-900/20 to-transparent pointer-events-none"></div>
            <div class="absolute -bottom-24 -left-24 w-96 h-96 bg-blue-600/10 rounded-full blur-3xl pointer-events-none"></div>

            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <div class="max-w-3xl">
                    <div class="inline-flex items-center space-x-2 px-3 py-1 rounded-full bg-blue-900/50 border border-blue-700 text-blue-300 text-sm font-medium mb-6">
                        <span class="w-2 h-2 rounded-full bg-blue-400 animate-pulse"></span>
                        <span>{hero.badge.clone()}</span>
                    </div>

                    <h1 class="text-5xl lg:text-7xl font-bold text-white mb-6 leading-tight">
                        {hero.headline.clone()}
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-emerald-400">
                            {hero.headline_accent.clone()}
                        </span>
                    </h1>

                    <p class="text-xl text-slate-300 mb-10 leading-relaxed max-w-2xl">
                        {hero.summary.clone()}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <Button href=Section::Consultation.href()>
                            <IconGlyph icon=Icon::Calendar class="mr-2" />
                            "Book Consultation"
                        </Button>
                        <Button variant=ButtonVariant::Outline href=Section::Portfolio.href()>
                            "View Past Projects"
                        </Button>
                    </div>

                    <div class="mt-12 flex items-center space-x-8 text-slate-400">
                        {hero
                            .focus
                            .iter()
                            .map(|area| {
                                view! {
                                    <div class="flex items-center space-x-2">
                                        <IconGlyph icon=area.icon />
                                        <span class="text-sm font-medium">{area.label.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection(catalog: &'static Catalog) -> impl IntoView {
    let about = &catalog.about;
    let last = about.paragraphs.len().saturating_sub(1);
    view! {
        <section id=Section::About.id() class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div>
                        <h2 class="text-3xl font-bold text-slate-900 mb-6">
                            {about.heading.clone()}
                        </h2>
                        <div class="prose prose-slate text-slate-600">
                            {about
                                .paragraphs
                                .iter()
                                .enumerate()
                                .map(|(i, p)| {
                                    let class = if i < last { "mb-4" } else { "" };
                                    view! { <p class=class>{p.clone()}</p> }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-8 pt-8 border-t border-slate-100 flex items-center justify-between">
                            {about
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="text-3xl font-bold text-slate-900">
                                                {stat.value.clone()}
                                            </div>
                                            <div class="text-sm text-slate-500">{stat.label.clone()}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <div class="aspect-square rounded-2xl bg-slate-100 overflow-hidden relative">
                            <div
                                class="absolute inset-0 opacity-20"
                                style="background-image: radial-gradient(circle, #94a3b8 1px, transparent 1px); background-size: 20px 20px"
                            ></div>
                            <div class="absolute inset-0 flex items-center justify-center text-slate-300">
                                <div class="text-center">
                                    <div class="w-24 h-24 bg-slate-200 rounded-full mx-auto mb-4 flex items-center justify-center">
                                        <span class="text-4xl">{catalog.profile.initials.clone()}</span>
                                    </div>
                                    <p class="font-mono text-sm">"Headshot Placeholder"</p>
                                </div>
                            </div>
                        </div>
                        <div class="absolute -bottom-6 -left-6 bg-white p-4 rounded-lg shadow-xl border border-slate-50 max-w-xs">
                            <div class="flex items-center space-x-3 mb-2">
                                <div class="w-8 h-8 bg-green-100 rounded-full flex items-center justify-center text-green-600">
                                    <IconGlyph icon=Icon::Download />
                                </div>
                                <span class="font-bold text-slate-900">"Resume"</span>
                            </div>
                            <p class="text-xs text-slate-500 mb-2">{about.resume_note.clone()}</p>
                            <a
                                href=catalog.profile.resume_href.clone()
                                class="text-xs font-bold text-blue-600 hover:underline"
                            >
                                "Download PDF →"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection(catalog: &'static Catalog) -> impl IntoView {
    let services = &catalog.services;
    view! {
        <section id=Section::Services.id() class="py-24 bg-slate-50">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading title=services.title.clone() subtitle=services.subtitle.clone() />
                <div class="grid md:grid-cols-3 gap-8">
                    {services
                        .entries
                        .iter()
                        .map(|service| view! { <ServiceCard service=service.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection(catalog: &'static Catalog) -> impl IntoView {
    let experience = &catalog.experience;
    view! {
        <section id=Section::Experience.id() class="py-24 bg-white">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading
                    title=experience.title.clone()
                    subtitle=experience.subtitle.clone()
                />
                <div class="space-y-4">
                    {experience
                        .entries
                        .iter()
                        .map(|entry| view! { <ExperienceItem entry=entry.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioSection(catalog: &'static Catalog) -> impl IntoView {
    let portfolio = &catalog.portfolio;
    let website = catalog.profile.website_url.clone();
    view! {
        <section id=Section::Portfolio.id() class="py-24 bg-slate-900 text-white">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex justify-between items-end mb-12">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            {portfolio.title.clone()}
                        </h2>
                        {portfolio
                            .subtitle
                            .clone()
                            .map(|s| view! { <p class="text-slate-400 max-w-xl">{s}</p> })}
                    </div>
                    <a
                        href=website.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden md:flex items-center text-blue-400 hover:text-white transition-colors font-semibold"
                    >
                        "View All Projects "
                        <IconGlyph icon=Icon::ChevronRight />
                    </a>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {portfolio
                        .entries
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>

                <div class="mt-8 text-center md:hidden">
                    <Button variant=ButtonVariant::Outline href=website>
                        "View All Projects"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFooter(catalog: &'static Catalog) -> impl IntoView {
    let profile = &catalog.profile;
    let contact = &catalog.contact;
    let calendar_url = profile.calendar_url.clone();
    let open_calendar = Callback::new(move |_: ()| {
        if let Err(e) = window().open_with_url_and_target(&calendar_url, "_blank") {
            log::error!("couldn't open booking page: {e:?}");
        }
    });
    let profile_links = [
        (Icon::Linkedin, profile.linkedin_url.clone(), "LinkedIn Profile"),
        (Icon::Mail, profile.mailto(), "Email"),
        (Icon::ExternalLink, profile.website_url.clone(), "Personal Website"),
    ];

    view! {
        <footer id=Section::Consultation.id() class="bg-white border-t border-slate-100 pt-20 pb-10">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h2 class="text-3xl font-bold text-slate-900 mb-6">{contact.heading.clone()}</h2>
                <p class="text-slate-600 mb-8 max-w-xl mx-auto">{contact.body.clone()}</p>

                <div class="flex flex-col sm:flex-row justify-center gap-4 mb-16">
                    <Button on_click=open_calendar>{contact.booking_label.clone()}</Button>
                    <Button variant=ButtonVariant::Secondary href=profile.mailto()>
                        {profile.email.clone()}
                    </Button>
                </div>

                <div class="flex justify-center space-x-8 mb-8">
                    {profile_links
                        .into_iter()
                        .map(|(icon, href, label)| {
                            view! {
                                <a
                                    href=href
                                    aria-label=label
                                    class="text-slate-400 hover:text-blue-600 transition-colors text-2xl"
                                >
                                    <IconGlyph icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="text-slate-400 text-sm">
                    {format!("© {} {}. All rights reserved.", BUILD_YEAR, profile.full_name())}
                </p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::theme::NavTone;

    fn render_page() -> String {
        let owner = Owner::new();
        owner.set();
        view! { <HomePage /> }.to_html()
    }

    #[test]
    fn test_sections_in_display_order() {
        let html = render_page();
        let display_order = [
            Section::About,
            Section::Services,
            Section::Experience,
            Section::Portfolio,
            Section::Consultation,
        ];
        let positions = display_order
            .iter()
            .map(|s| {
                html.find(&format!("id=\"{}\"", s.id()))
                    .unwrap_or_else(|| panic!("missing section {}", s.id()))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_menu_starts_closed() {
        let html = render_page();
        // only the desktop call-to-action; the mobile dropdown is not rendered
        assert_eq!(html.matches("Contact Me").count(), 1);
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("☰"));
        assert!(html.contains(NavTone::Transparent.bar_class()));
    }

    #[test]
    fn test_catalog_content_rendered() {
        let html = render_page();
        let catalog = catalog().unwrap();
        for link in &catalog.nav_links {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
        }
        for entry in &catalog.experience.entries {
            assert!(html.contains(&entry.period));
        }
        for project in &catalog.portfolio.entries {
            assert!(html.contains(&project.color_theme));
        }
        assert!(html.contains("href=\"mailto:matt@pugsley.net\""));
        assert!(html.contains(&format!("© {BUILD_YEAR} Matthew Pugsley")));
    }
}
