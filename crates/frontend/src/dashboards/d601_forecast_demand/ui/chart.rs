use super::layout::{
    axis_ticks, baseline, chart_height, chart_width, layout_bars, AXIS_LEFT, BAR_GAP,
};
use crate::shared::api::BrowserApi;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use crate::usecases::u601_process_files::ArtifactPresenter;
use contracts::shared::forecast::ChartSeries;
use contracts::usecases::u601_process_files::ArtifactLinkSet;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Forecasted demand per product and store, one bar per forecast row
#[component]
pub fn ForecastChart(api: BrowserApi, links: ArtifactLinkSet) -> impl IntoView {
    let (series, set_series) = signal(None::<ChartSeries>);
    let api = StoredValue::new(api);
    let links = StoredValue::new(links);

    // Загрузка при монтировании; новый набор ссылок монтирует график заново
    Effect::new(move |_| {
        set_series.set(None);
        let presenter = ArtifactPresenter::new(api.get_value());
        let links = links.get_value();
        spawn_local(async move {
            let loaded = presenter.load_chart_series(&links).await;
            log::debug!("d601: {} bars loaded", loaded.len());
            set_series.set(Some(loaded));
        });
    });

    view! {
        <PageFrame page_id=page_id("d601_forecast_demand", PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <Card>
                <h3 class="chart__title">"Forecasted Demand"</h3>
                {move || match series.get() {
                    None => view! {
                        <div class="chart__loading">
                            <Spinner label="Loading forecast..." />
                        </div>
                    }
                    .into_any(),
                    Some(series) if series.is_empty() => view! {
                        <div class="chart__empty">"No forecast data available"</div>
                    }
                    .into_any(),
                    Some(series) => view! { <BarChart series=series /> }.into_any(),
                }}
            </Card>
        </PageFrame>
    }
}

#[component]
fn BarChart(series: ChartSeries) -> impl IntoView {
    let bars = layout_bars(&series);
    let ticks = axis_ticks(&series);
    let width = chart_width(bars.len());
    let height = chart_height();
    let base = baseline();
    let axis_right = width - BAR_GAP / 2.0;

    let tick_views = ticks
        .into_iter()
        .map(|tick| {
            view! {
                <g class="chart__tick">
                    <line x1=AXIS_LEFT y1=tick.y x2=axis_right y2=tick.y stroke="#e0e0e0" />
                    <text x={AXIS_LEFT - 6.0} y={tick.y + 4.0} text-anchor="end" font-size="11">
                        {tick.value.to_string()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bar_views = bars
        .into_iter()
        .map(|bar| {
            let label_x = bar.center_x();
            let label_y = base + 12.0;
            let title = match bar.value {
                Some(value) => format!("{}: {}", bar.label, value),
                None => format!("{}: n/a", bar.label),
            };
            view! {
                <g class="chart__bar">
                    <rect
                        x=bar.x
                        y=bar.y
                        width=bar.width
                        height=bar.height
                        fill="rgba(75, 192, 192, 0.6)"
                        stroke="rgba(75, 192, 192, 1)"
                        data-tooltip=title
                    />
                    <text
                        x=label_x
                        y=label_y
                        font-size="11"
                        text-anchor="end"
                        transform=format!("rotate(-45 {} {})", label_x, label_y)
                    >
                        {bar.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart__scroll">
            <svg
                class="chart"
                width=width
                height=height
                viewBox=format!("0 0 {} {}", width, height)
                role="img"
                aria-label="Forecasted Demand"
            >
                {tick_views}
                <line x1=AXIS_LEFT y1=base x2=axis_right y2=base stroke="#666" />
                {bar_views}
            </svg>
        </div>
    }
}
