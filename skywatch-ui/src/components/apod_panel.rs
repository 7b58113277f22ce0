//! Astronomy Picture of the Day panel

use leptos::*;
use skywatch::panels::{ApodView, PanelView};
use skywatch::Panel;

use super::{panel_body, FallbackImage, PanelFrame};

#[component]
pub fn ApodPanel(#[prop(into)] data: Signal<PanelView<ApodView>>) -> impl IntoView {
    view! {
        <PanelFrame panel=Panel::Apod>
            {move || data.with(|state| panel_body(state, apod_content))}
        </PanelFrame>
    }
}

fn apod_content(apod: &ApodView) -> View {
    let media = if apod.is_video() {
        view! {
            <div class="aspect-video w-full">
                <iframe
                    src=apod.url.clone()
                    title=apod.title.clone()
                    class="w-full h-full rounded-lg"
                    allow="encrypted-media; picture-in-picture"
                    allowfullscreen=true
                />
            </div>
        }
        .into_view()
    } else {
        view! {
            <a href=apod.full_url.clone() target="_blank" rel="noopener noreferrer">
                <FallbackImage
                    src=apod.url.clone()
                    alt=apod.title.clone()
                    class="w-full max-h-[32rem] min-h-[16rem] object-cover rounded-lg"
                />
            </a>
        }
        .into_view()
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            {media}
            <div class="space-y-3">
                <h3 class="text-2xl font-bold">{apod.title.clone()}</h3>
                <p class="text-sm text-gray-400">
                    {apod.date.clone()}
                    {apod.copyright.clone().map(|c| format!(" · © {}", c))}
                </p>
                <p class="text-gray-300 leading-relaxed">{apod.explanation.clone()}</p>
            </div>
        </div>
    }
    .into_view()
}
