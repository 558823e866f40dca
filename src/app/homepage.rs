use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::chrome::{FloatingShapes, NavBar, ScrollProgressBar, ScrollToTopButton, ThemeToggle};
use super::contact::ContactSection;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use super::stats::StatsSection;
use crate::content::portfolio;

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-red-500">{e.to_string()}</p>
            });
        }
    };

    Either::Left(view! {
        <Title text=portfolio.profile.name.clone() />
        <div class="min-h-screen bg-navy text-white relative">
            <FloatingShapes />
            <ScrollProgressBar />
            <ThemeToggle />
            <ScrollToTopButton />
            <NavBar brand=portfolio.profile.brand.clone() />
            <Hero profile=portfolio.profile.clone() />
            <StatsSection stats=portfolio.stats.clone() />
            <SkillsSection skills=portfolio.skills.clone() />
            <ProjectsSection projects=portfolio.projects.clone() />
            <ContactSection contact=portfolio.contact.clone() />
            <Footer name=portfolio.profile.name.clone() />
        </div>
    })
}
