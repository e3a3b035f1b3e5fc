use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use orchard::simulation::world::World;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub paused: bool,
    pub ticks_per_frame: u32,
    pub spawn_person_requested: bool,
    pub people_count_history: VecDeque<(f64, f64)>,
    pub apple_count_history: VecDeque<(f64, f64)>,
    last_sampled_tick: u64,
    sample_interval: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            paused: false,
            ticks_per_frame: 1,
            spawn_person_requested: false,
            people_count_history: VecDeque::new(),
            apple_count_history: VecDeque::new(),
            last_sampled_tick: 0,
            sample_interval: 10,
        }
    }

    pub fn update_history(&mut self, world: &World) {
        let ticks = world.stats().ticks;
        if ticks == 0 || ticks - self.last_sampled_tick < self.sample_interval {
            return;
        }
        self.last_sampled_tick = ticks;

        let t = ticks as f64;
        self.people_count_history
            .push_back((t, world.people().len() as f64));
        self.apple_count_history
            .push_back((t, world.apples().available() as f64));

        if self.people_count_history.len() > MAX_HISTORY_POINTS {
            self.people_count_history.pop_front();
        }
        if self.apple_count_history.len() > MAX_HISTORY_POINTS {
            self.apple_count_history.pop_front();
        }
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw_ui(state: &mut UIState, world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        draw_stats_panel(egui_ctx, state, world);
    });
}

fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, world: &World) {
    egui::SidePanel::right("stats_panel")
        .default_width(280.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Orchard");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused {
                    "▶ Resume"
                } else {
                    "⏸ Pause"
                };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("➕ Person").clicked() {
                    state.spawn_person_requested = true;
                }
            });

            ui.separator();

            ui.label("Ticks per frame");
            ui.add(egui::Slider::new(&mut state.ticks_per_frame, 1..=64).text("x"));

            ui.separator();

            let stats = world.stats();
            ui.label(format!("Tick: {}", stats.ticks));
            ui.label(format!(
                "People: {}/{}",
                world.people().len(),
                world.params().n_people
            ));
            ui.label(format!(
                "Apples: {}/{}",
                world.apples().available(),
                world.params().n_apples
            ));

            ui.separator();

            ui.label(format!("Apples eaten: {}", stats.apples_eaten));
            ui.label(format!("Apples respawned: {}", stats.apples_spawned));
            ui.label(format!("Deaths: {}", stats.deaths));

            if world.is_extinct() {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(255, 120, 120), "Everyone has died");
            }

            ui.separator();

            ui.heading("Population Over Time");
            draw_population_plot(ui, &state.people_count_history, &state.apple_count_history);
        });
}

fn draw_population_plot(
    ui: &mut egui::Ui,
    people_data: &VecDeque<(f64, f64)>,
    apple_data: &VecDeque<(f64, f64)>,
) {
    if people_data.is_empty() && apple_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTick: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            if !people_data.is_empty() {
                let people_points: PlotPoints = people_data.iter().map(|&(x, y)| [x, y]).collect();
                let people_line = Line::new(people_points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("People");
                plot_ui.line(people_line);
            }

            if !apple_data.is_empty() {
                let apple_points: PlotPoints = apple_data.iter().map(|&(x, y)| [x, y]).collect();
                let apple_line = Line::new(apple_points)
                    .color(egui::Color32::from_rgb(220, 80, 80))
                    .name("Apples");
                plot_ui.line(apple_line);
            }
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
