use leptos::prelude::*;

use super::{AboutTeaser, BedBanner, CategoryGrid, Footer, Hero, NewProducts, ReferralBanner};
use crate::types::HomeContent;

/// The home page body, every frame in shipping order. The only data that
/// flows is what the page itself supplies: the new-arrival shots and the
/// atelier photo.
#[component]
pub fn HomePage(
    /// Content for the two frames that take props
    content: HomeContent,
) -> impl IntoView {
    view! {
        <Hero />
        <CategoryGrid />
        <BedBanner />
        <NewProducts shots=content.new_arrivals />
        <ReferralBanner />
        <AboutTeaser img=content.about_img />
        <Footer />
    }
}
