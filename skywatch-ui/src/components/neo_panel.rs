//! Near-Earth objects panel

use leptos::*;
use skywatch::panels::{ApproachGroup, NeoView, PanelView};
use skywatch::Panel;

use super::{panel_body, BarChart, PanelFrame, PieChart};

#[component]
pub fn NeoPanel(#[prop(into)] data: Signal<PanelView<NeoView>>) -> impl IntoView {
    view! {
        <PanelFrame panel=Panel::NearEarthObjects>
            {move || data.with(|state| panel_body(state, neo_content))}
        </PanelFrame>
    }
}

fn neo_content(neo: &NeoView) -> View {
    let stats = neo.stats;

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-3 gap-4">
                <Stat label="Total Objects" value=stats.total_objects.to_string() />
                <Stat label="Potentially Hazardous" value=stats.potentially_hazardous.to_string() />
                <Stat label="Days Tracked" value=stats.days_tracked.to_string() />
            </div>

            <PieChart slices=neo.hazard.slices().to_vec() label="Potentially hazardous versus safe objects" />

            {(!neo.closest.is_empty()).then(|| view! {
                <div>
                    <h3 class="text-sm font-medium text-gray-400 mb-2">"Closest approaches (km)"</h3>
                    <BarChart bars=neo.closest.clone() />
                </div>
            })}

            <div>
                <h3 class="text-sm font-medium text-gray-400 mb-2">"Recent Close Approaches"</h3>
                <div class="space-y-4">
                    {neo.recent.iter().cloned().map(|group| view! { <ApproachDay group=group /> }).collect_view()}
                </div>
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <div class="text-2xl font-bold">{value}</div>
            <div class="text-xs text-gray-400 mt-1">{label}</div>
        </div>
    }
}

#[component]
fn ApproachDay(group: ApproachGroup) -> impl IntoView {
    view! {
        <div>
            <div class="text-sm font-semibold text-gray-300">{group.date.clone()}</div>
            <ul class="mt-1 divide-y divide-gray-800">
                {group.objects.iter().map(|neo| view! {
                    <li class="flex items-center justify-between py-2 text-sm">
                        <span class="flex items-center gap-2">
                            {neo.hazardous.then(|| view! {
                                <span class="px-2 py-0.5 rounded bg-red-900 text-red-200 text-xs">"Hazardous"</span>
                            })}
                            {neo.name.clone()}
                        </span>
                        <span class="text-gray-400 tabular-nums">{neo.distance_label()}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
