//! NASA media library panel

use leptos::*;
use skywatch::panels::{ImageSource, MediaCard, MediaView, PanelView};
use skywatch::Panel;

use super::{panel_body, FallbackImage, ImagePlaceholder, PanelFrame, PieChart};

#[component]
pub fn MediaPanel(#[prop(into)] data: Signal<PanelView<MediaView>>) -> impl IntoView {
    view! {
        <PanelFrame panel=Panel::MediaLibrary>
            {move || data.with(|state| panel_body(state, media_content))}
        </PanelFrame>
    }
}

fn media_content(media: &MediaView) -> View {
    let slices = media.distribution.slices().to_vec();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <PieChart slices=slices label="Images versus videos in the search results" />
                <div class="text-right">
                    <div class="text-3xl font-bold">{media.total_results}</div>
                    <div class="text-sm text-gray-400">"results"</div>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                {media.cards.iter().cloned().map(|card| view! { <MediaCardView card=card /> }).collect_view()}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn MediaCardView(card: MediaCard) -> impl IntoView {
    let date = card.date().to_string();
    let image = match &card.image {
        ImageSource::Url(url) => view! {
            <FallbackImage src=url.clone() alt=card.title.clone() class="w-full h-32 object-cover" />
        }
        .into_view(),
        ImageSource::Placeholder => view! { <ImagePlaceholder class="w-full h-32" /> }.into_view(),
    };

    view! {
        <article class="bg-gray-800 rounded-lg overflow-hidden">
            {image}
            <div class="p-3">
                <h3 class="text-sm font-medium line-clamp-2">{card.title.clone()}</h3>
                <div class="flex items-center justify-between mt-2 text-xs text-gray-400">
                    <span>{date}</span>
                    <span class="uppercase tracking-wide">{card.kind.as_str()}</span>
                </div>
            </div>
        </article>
    }
}
