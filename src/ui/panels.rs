use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::data::loader::SeriesSource;
use crate::state::AppState;
use crate::ui::plot;

const PAGE_TITLE: &str = "🌊 바다의 온도 경고음: 해수온 상승과 지속 가능한 해결책";
const PUBLIC_HEADER: &str = "📈 공개 데이터 기반 해수온 상승 분석";
const USER_HEADER: &str = "📝 사용자 입력 데이터 기반 해수온 분석";
const CONCLUSION_HEADER: &str = "💡 결론 및 제언";
const FILTER_HEADER: &str = "사용자 데이터 필터";
const REGION_SELECT_LABEL: &str = "지역 선택";
const PUBLIC_DOWNLOAD_LABEL: &str = "📥 공개 데이터 다운로드";
const USER_DOWNLOAD_LABEL: &str = "📥 사용자 데이터 다운로드";
const FALLBACK_WARNING: &str = "공개 데이터 로드 실패, 예시 데이터로 대체합니다.";
const LOADING_LABEL: &str = "공개 데이터 불러오는 중…";

const CONCLUSION_BULLETS: &[&str] = &[
    "해수온 상승은 산호초 백화, 어류 이동 경로 변화, 해안 도시 침수 등 다양한 문제를 발생시킵니다.",
    "원인은 주로 인간 활동으로 인한 온실가스 배출이며, 국제적 정책 대응과 개인의 실천이 동시에 필요합니다.",
    "학생 개개인의 작은 행동(일회용품 줄이기, 에너지 절약 등)도 장기적으로 큰 효과를 발휘할 수 있습니다.",
];

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: page title, load status, export status line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong(PAGE_TITLE);
        ui.separator();

        match &state.public {
            None => {
                ui.spinner();
                ui.label(LOADING_LABEL);
            }
            Some(public) => {
                ui.label(format!("공개 데이터 {}행", public.series.len()));
                if public.source == SeriesSource::Fallback {
                    ui.label(RichText::new(FALLBACK_WARNING).color(Color32::YELLOW));
                }
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – region filter
// ---------------------------------------------------------------------------

/// Render the left filter panel: one checkbox per region, tinted with the
/// region's line colour, plus select-all / select-none shortcuts.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(FILTER_HEADER);
    ui.separator();

    if state.sample.is_empty() {
        ui.label("표본 데이터가 없습니다.");
        return;
    }
    let regions: Vec<String> = state.sample.regions.iter().cloned().collect();

    ui.strong(format!(
        "{REGION_SELECT_LABEL}  ({}/{})",
        state.selected_regions.len(),
        regions.len()
    ));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_regions();
        }
        if ui.small_button("None").clicked() {
            state.select_no_regions();
        }
    });

    for region in &regions {
        let mut checked = state.selected_regions.contains(region);
        let text = RichText::new(region).color(state.color_map.color_for(region));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_region(region);
        }
    }

    ui.separator();
    ui.label(format!(
        "표본 {}행 중 {}행 표시",
        state.sample.len(),
        state.filtered_view().len()
    ));
}

// ---------------------------------------------------------------------------
// Central panel – the dashboard body
// ---------------------------------------------------------------------------

/// Render the central dashboard: public section, user section, conclusion.
pub fn dashboard_body(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(PUBLIC_HEADER);
            ui.add_space(4.0);

            let download_public = match &state.public {
                Some(public) => {
                    plot::public_chart(ui, &public.series);
                    ui.button(PUBLIC_DOWNLOAD_LABEL).clicked()
                }
                None => {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.spinner();
                        ui.label(LOADING_LABEL);
                    });
                    false
                }
            };
            if download_public {
                save_public_csv(state);
            }

            ui.add_space(12.0);
            ui.separator();

            ui.heading(USER_HEADER);
            ui.add_space(4.0);

            // The derived view is recomputed here on every frame; only the
            // base table is cached.
            let view = state.filtered_view();
            plot::regional_chart(ui, &state.sample, &view, &state.color_map);
            if ui.button(USER_DOWNLOAD_LABEL).clicked() {
                save_filtered_csv(state, &view);
            }

            ui.add_space(12.0);
            ui.separator();

            conclusion_section(ui);
        });
}

/// Fixed closing text; no data dependency.
fn conclusion_section(ui: &mut Ui) {
    ui.heading(CONCLUSION_HEADER);
    ui.add_space(4.0);
    for bullet in CONCLUSION_BULLETS {
        ui.label(format!("• {bullet}"));
    }
}

// ---------------------------------------------------------------------------
// CSV downloads
// ---------------------------------------------------------------------------

fn save_public_csv(state: &mut AppState) {
    let contents = match &state.public {
        Some(public) => export::public_series_csv(&public.series),
        None => return,
    };
    write_via_dialog(state, "공개 데이터 저장", export::PUBLIC_CSV_NAME, contents);
}

fn save_filtered_csv(state: &mut AppState, view: &[usize]) {
    let contents = export::regional_view_csv(&state.sample, view);
    write_via_dialog(state, "사용자 데이터 저장", export::USER_CSV_NAME, contents);
}

fn write_via_dialog(
    state: &mut AppState,
    title: &str,
    file_name: &str,
    contents: anyhow::Result<String>,
) {
    let contents = match contents {
        Ok(contents) => contents,
        Err(err) => {
            log::error!("csv export failed: {err:#}");
            state.status_message = Some(format!("내보내기 실패: {err:#}"));
            return;
        }
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title(title)
        .set_file_name(file_name)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        // Dialog cancelled.
        return;
    };

    match std::fs::write(&path, contents) {
        Ok(()) => {
            log::info!("wrote {}", path.display());
            state.status_message = Some(format!("저장 완료: {}", path.display()));
        }
        Err(err) => {
            log::error!("failed to write {}: {err}", path.display());
            state.status_message = Some(format!("저장 실패: {err}"));
        }
    }
}
