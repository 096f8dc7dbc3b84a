use crate::advisor::recommend_rate;
use crate::metrics::compute_kpis;
use crate::model::{
    coerce, coerce_non_negative, CompetitorEntry, CompetitorStats, KpiSet, OperationalInputs,
    Recommendation, SimulationResult,
};
use crate::simulate::simulate_price_change;
use crate::stats::competitor_stats;
use crate::store::{self, SavedState};

use eframe::egui;
use egui::{Color32, Context, FontFamily, FontId, Margin, RichText, Stroke, Vec2, Visuals};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints, VLine};

pub fn set_custom_style(ctx: &Context) {
    // Deep navy hotel-lobby theme with brass accents
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_rgb(12, 18, 28);
    visuals.window_fill = Color32::from_rgb(16, 24, 36);
    visuals.extreme_bg_color = Color32::from_rgb(24, 34, 50);
    visuals.faint_bg_color = Color32::from_rgb(20, 30, 44);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(28, 40, 58);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(50, 70, 95));

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(38, 54, 76);
    visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, Color32::from_rgb(120, 170, 210));

    visuals.widgets.active.bg_fill = Color32::from_rgb(48, 68, 95);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, Color32::from_rgb(170, 210, 245));

    visuals.selection.bg_fill = Color32::from_rgb(40, 70, 100);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(150, 200, 240));

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = Margin::same(12);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.indent = 16.0;

    style.text_styles.insert(
        egui::TextStyle::Body,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        FontId::new(22.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        FontId::new(14.0, FontFamily::Monospace),
    );

    ctx.set_style(style);
}

const HEADING_COLOR: Color32 = Color32::from_rgb(160, 205, 245);
const LABEL_COLOR: Color32 = Color32::from_rgb(150, 170, 195);
const VALUE_COLOR: Color32 = Color32::from_rgb(225, 235, 245);

pub struct AnalyzerApp {
    // Form fields stay as entered; coercion to numbers happens only on
    // calculate, in model::coerce.
    rooms_available: String,
    rooms_sold: String,
    your_rate: String,
    room_revenue: String,
    total_revenue: String,
    gross_profit: String,

    competitors: Vec<CompetitorEntry>,
    new_competitor_name: String,
    new_competitor_price: String,

    last_inputs: OperationalInputs,
    kpis: Option<KpiSet>,
    stats: CompetitorStats,
    recommendation: Option<Recommendation>,

    sim_rate: f64,
    elasticity: f64,
    simulation: Option<SimulationResult>,
    sim_attempted: bool,
}

impl AnalyzerApp {
    pub fn new() -> Self {
        let saved = store::load();
        Self {
            rooms_available: field_text(saved.last_inputs.rooms_available),
            rooms_sold: field_text(saved.last_inputs.rooms_sold),
            your_rate: field_text(saved.last_inputs.your_rate),
            room_revenue: field_text(saved.last_inputs.room_revenue),
            total_revenue: field_text(saved.last_inputs.total_revenue),
            gross_profit: field_text(saved.last_inputs.gross_profit),

            stats: competitor_stats(
                &saved.competitors.iter().map(|c| c.price).collect::<Vec<_>>(),
            ),
            competitors: saved.competitors,
            new_competitor_name: String::new(),
            new_competitor_price: String::new(),

            last_inputs: saved.last_inputs,
            kpis: None,
            recommendation: None,

            sim_rate: 150.0,
            elasticity: -0.5,
            simulation: None,
            sim_attempted: false,
        }
    }

    fn persist(&self) {
        store::save(&SavedState {
            competitors: self.competitors.clone(),
            last_inputs: self.last_inputs.clone(),
        });
    }

    fn competitor_prices(&self) -> Vec<f64> {
        self.competitors.iter().map(|c| c.price).collect()
    }

    fn calculate(&mut self) {
        let inputs = OperationalInputs {
            rooms_available: coerce_non_negative(&self.rooms_available),
            rooms_sold: coerce_non_negative(&self.rooms_sold),
            your_rate: coerce_non_negative(&self.your_rate),
            room_revenue: coerce_non_negative(&self.room_revenue),
            total_revenue: coerce_non_negative(&self.total_revenue),
            gross_profit: coerce(&self.gross_profit),
        };

        let kpis = compute_kpis(&inputs);
        self.stats = competitor_stats(&self.competitor_prices());
        self.recommendation = Some(recommend_rate(&kpis, &self.stats));

        if self.sim_rate == 0.0 && kpis.your_rate > 0.0 {
            self.sim_rate = kpis.your_rate;
        }

        self.kpis = Some(kpis);
        self.last_inputs = inputs;
        self.simulation = None;
        self.sim_attempted = false;
        self.persist();
    }

    fn add_competitor(&mut self) {
        let name = self.new_competitor_name.trim();
        if name.is_empty() {
            return;
        }
        self.competitors.push(CompetitorEntry {
            name: name.to_string(),
            price: coerce_non_negative(&self.new_competitor_price),
        });
        self.new_competitor_name.clear();
        self.new_competitor_price.clear();
        self.stats = competitor_stats(&self.competitor_prices());
        self.persist();
    }

    fn run_simulation(&mut self) {
        self.sim_attempted = true;
        self.simulation = self
            .kpis
            .as_ref()
            .and_then(|k| simulate_price_change(k, self.sim_rate, self.elasticity));
    }

    fn summary_text(&self) -> String {
        let mut out = String::from("Hotel Revenue Summary\n");
        if let Some(k) = &self.kpis {
            out.push_str(&format!(
                "ADR: {}\nRevPAR: {}\nOccupancy: {:.2}%\nGOPPAR: {}\nTRevPAR: {}\n",
                money(k.adr),
                money(k.revpar),
                k.occupancy,
                money(k.goppar),
                money(k.trevpar),
            ));
        }
        if self.stats.count > 0 {
            out.push_str(&format!(
                "Competitors: {} (avg {}, min {}, max {}, std dev {:.2})\n",
                self.stats.count,
                money(self.stats.avg),
                money(self.stats.min),
                money(self.stats.max),
                self.stats.std_dev,
            ));
        }
        if let Some(rec) = &self.recommendation {
            match rec.suggested_rate {
                Some(rate) => out.push_str(&format!(
                    "Suggested rate: {} ({:+.1}%)\n{}\n",
                    money(rate),
                    rec.change_percent,
                    rec.reason
                )),
                None => out.push_str(&format!("No suggestion: {}\n", rec.reason)),
            }
        }
        out
    }

    fn form_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
        ui.label(RichText::new(label).color(LABEL_COLOR));
        ui.add(egui::TextEdit::singleline(value).desired_width(120.0));
        ui.end_row();
    }

    fn kpi_card(ui: &mut egui::Ui, label: &str, value: String, hint: &str) {
        egui::Frame::new()
            .fill(Color32::from_rgb(22, 32, 46))
            .stroke(Stroke::new(1.0, Color32::from_rgb(45, 65, 90)))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_width(110.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).color(LABEL_COLOR).small())
                        .on_hover_text(hint);
                    ui.label(RichText::new(value).color(VALUE_COLOR).strong().size(19.0));
                });
            });
    }

    fn show_competitor_panel(&mut self, ctx: &Context) {
        egui::SidePanel::right("competitors")
            .min_width(280.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                ui.heading(RichText::new("🏨 Competitor Rates").color(HEADING_COLOR));
                ui.separator();

                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.new_competitor_name)
                            .hint_text("Hotel name")
                            .desired_width(130.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.new_competitor_price)
                            .hint_text("Rate")
                            .desired_width(60.0),
                    );
                    if ui.button("➕ Add").clicked() {
                        self.add_competitor();
                    }
                });

                ui.add_space(6.0);

                let mut to_delete: Option<usize> = None;
                let mut edited = false;

                TableBuilder::new(ui)
                    .striped(true)
                    .vscroll(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::remainder().at_least(120.0).clip(true))
                    .column(Column::exact(90.0))
                    .column(Column::exact(40.0))
                    .header(28.0, |mut header| {
                        header.col(|ui| {
                            ui.label(RichText::new("Competitor").color(LABEL_COLOR).strong());
                        });
                        header.col(|ui| {
                            ui.label(RichText::new("Rate").color(LABEL_COLOR).strong());
                        });
                        header.col(|_ui| {});
                    })
                    .body(|body| {
                        let competitors = &mut self.competitors;
                        body.rows(30.0, competitors.len(), |mut row| {
                            let i = row.index();
                            row.col(|ui| {
                                if ui
                                    .add(egui::TextEdit::singleline(&mut competitors[i].name))
                                    .changed()
                                {
                                    edited = true;
                                }
                            });
                            row.col(|ui| {
                                if ui
                                    .add(
                                        egui::DragValue::new(&mut competitors[i].price)
                                            .range(0.0..=f64::INFINITY)
                                            .prefix("$")
                                            .speed(1.0),
                                    )
                                    .changed()
                                {
                                    edited = true;
                                }
                            });
                            row.col(|ui| {
                                if ui.button("🗑").on_hover_text("Remove").clicked() {
                                    to_delete = Some(i);
                                }
                            });
                        });
                    });

                if let Some(i) = to_delete {
                    self.competitors.remove(i);
                    edited = true;
                }
                if edited {
                    self.stats = competitor_stats(&self.competitor_prices());
                    self.persist();
                }

                ui.add_space(8.0);
                ui.separator();

                if self.stats.count == 0 {
                    ui.label(
                        RichText::new("No competitors yet — the advisor will treat the market average as zero.")
                            .color(LABEL_COLOR)
                            .italics(),
                    );
                } else {
                    ui.label(RichText::new("Market Snapshot").color(HEADING_COLOR).strong());
                    egui::Grid::new("stats_grid").num_columns(2).show(ui, |ui| {
                        ui.label(RichText::new("Count").color(LABEL_COLOR));
                        ui.label(RichText::new(self.stats.count.to_string()).color(VALUE_COLOR));
                        ui.end_row();
                        ui.label(RichText::new("Average").color(LABEL_COLOR));
                        ui.label(RichText::new(money(self.stats.avg)).color(VALUE_COLOR));
                        ui.end_row();
                        ui.label(RichText::new("Min / Max").color(LABEL_COLOR));
                        ui.label(
                            RichText::new(format!(
                                "{} / {}",
                                money(self.stats.min),
                                money(self.stats.max)
                            ))
                            .color(VALUE_COLOR),
                        );
                        ui.end_row();
                        ui.label(RichText::new("Std Dev").color(LABEL_COLOR));
                        ui.label(
                            RichText::new(format!("{:.2}", self.stats.std_dev)).color(VALUE_COLOR),
                        );
                        ui.end_row();
                    });
                }
            });
    }

    fn show_recommendation(&self, ui: &mut egui::Ui, rec: &Recommendation) {
        let (badge, color) = if rec.suggested_rate.is_none() {
            ("⚠ No recommendation", Color32::from_rgb(220, 180, 90))
        } else if rec.change_percent < 0.0 {
            ("▼ Lower your rate", Color32::from_rgb(240, 120, 110))
        } else if rec.change_percent > 0.0 {
            ("▲ Raise your rate", Color32::from_rgb(110, 230, 140))
        } else {
            ("● Hold your rate", Color32::from_rgb(170, 190, 210))
        };

        egui::Frame::new()
            .fill(Color32::from_rgb(20, 30, 44))
            .stroke(Stroke::new(2.0, color))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(badge).color(color).strong().size(17.0));
                    if let Some(rate) = rec.suggested_rate {
                        ui.separator();
                        ui.label(
                            RichText::new(format!(
                                "{} ({:+.1}%)",
                                money(rate),
                                rec.change_percent
                            ))
                            .color(VALUE_COLOR)
                            .strong(),
                        );
                    }
                });
                ui.label(RichText::new(&rec.reason).color(LABEL_COLOR).italics());
            });
    }

    fn show_simulation(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("📈 What-If Simulation").color(HEADING_COLOR));
        ui.label(
            RichText::new("Linear constant-elasticity projection around the current rate.")
                .color(LABEL_COLOR)
                .small(),
        );

        ui.horizontal(|ui| {
            ui.label(RichText::new("Hypothetical rate:").color(LABEL_COLOR));
            ui.add(
                egui::DragValue::new(&mut self.sim_rate)
                    .range(0.0..=f64::INFINITY)
                    .prefix("$")
                    .speed(1.0),
            );

            ui.separator();

            ui.label(RichText::new("Elasticity:").color(LABEL_COLOR))
                .on_hover_text("Percent occupancy change per percent price change; usually negative");
            ui.add(egui::DragValue::new(&mut self.elasticity).range(-5.0..=5.0).speed(0.05));

            ui.separator();

            if ui.button("▶ Simulate").clicked() {
                self.run_simulation();
            }
        });

        if let Some(sim) = self.simulation.clone() {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                Self::kpi_card(
                    ui,
                    "Predicted Occupancy",
                    format!("{:.2}%", sim.predicted_occupancy),
                    "Clamped to 0-100%",
                );
                Self::kpi_card(
                    ui,
                    "Rooms Sold",
                    format!("{:.0}", sim.predicted_rooms_sold),
                    "Rounded to whole rooms",
                );
                Self::kpi_card(
                    ui,
                    "Room Revenue",
                    money(sim.predicted_room_revenue),
                    "Rooms sold × hypothetical rate",
                );
                Self::kpi_card(ui, "RevPAR", money(sim.predicted_revpar), "Revenue per available room");
                Self::kpi_card(
                    ui,
                    "Price Change",
                    format!("{:+.2}%", sim.price_change_percent),
                    "Relative to current rate",
                );
                Self::kpi_card(
                    ui,
                    "Occupancy Change",
                    format!("{:+.2}%", sim.occupancy_change_percent),
                    "Elasticity × price change",
                );
            });

            if let Some(kpis) = self.kpis.clone() {
                self.show_revenue_curve(ui, &kpis);
            }
        } else if self.sim_attempted {
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "Insufficient baseline: calculate KPIs with a non-zero rate before simulating.",
                )
                .color(Color32::from_rgb(220, 180, 90)),
            );
        }
    }

    /// Sweeps 50%-150% of the current rate through the simulator to chart
    /// where revenue peaks under the chosen elasticity.
    fn show_revenue_curve(&self, ui: &mut egui::Ui, kpis: &KpiSet) {
        let current = kpis.your_rate;
        if current <= 0.0 {
            return;
        }

        let points: PlotPoints = (0..=100)
            .filter_map(|i| {
                let rate = current * (0.5 + i as f64 / 100.0);
                simulate_price_change(kpis, rate, self.elasticity)
                    .map(|sim| [rate, sim.predicted_room_revenue])
            })
            .collect();

        ui.add_space(6.0);
        Plot::new("revenue_curve")
            .height(220.0)
            .x_axis_label("Rate")
            .y_axis_label("Room revenue")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Projected revenue", points)
                        .color(Color32::from_rgb(120, 180, 240)),
                );
                plot_ui.vline(
                    VLine::new("Current rate", current)
                        .color(Color32::from_rgb(170, 190, 210)),
                );
                plot_ui.vline(
                    VLine::new("Hypothetical", self.sim_rate)
                        .color(Color32::from_rgb(110, 230, 140)),
                );
            });
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new("🛎 Hotel Revenue Analyzer")
                        .color(HEADING_COLOR)
                        .strong()
                        .size(24.0),
                );

                ui.separator();

                if ui
                    .add_sized(
                        Vec2::new(130.0, 32.0),
                        egui::Button::new(
                            RichText::new("🧮 Calculate").color(HEADING_COLOR).strong(),
                        ),
                    )
                    .clicked()
                {
                    self.calculate();
                }

                if self.kpis.is_some()
                    && ui.button("📋 Copy Summary").on_hover_text("Copy results as text").clicked()
                {
                    ctx.copy_text(self.summary_text());
                }
            });
            ui.add_space(4.0);
        });

        self.show_competitor_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("Operational Inputs").color(HEADING_COLOR));
                ui.label(
                    RichText::new("Blank or non-numeric fields count as zero.")
                        .color(LABEL_COLOR)
                        .small(),
                );

                egui::Grid::new("inputs_grid")
                    .num_columns(4)
                    .spacing([24.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Rooms available").color(LABEL_COLOR));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.rooms_available)
                                .desired_width(120.0),
                        );
                        Self::form_row(ui, "Rooms sold", &mut self.rooms_sold);

                        ui.label(RichText::new("Your rate").color(LABEL_COLOR));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.your_rate).desired_width(120.0),
                        );
                        Self::form_row(ui, "Room revenue", &mut self.room_revenue);

                        ui.label(RichText::new("Total revenue").color(LABEL_COLOR));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.total_revenue)
                                .desired_width(120.0),
                        );
                        Self::form_row(ui, "Gross profit", &mut self.gross_profit);
                    });

                ui.add_space(10.0);
                ui.separator();

                if let Some(kpis) = self.kpis.clone() {
                    ui.heading(RichText::new("Key Performance Indicators").color(HEADING_COLOR));
                    ui.horizontal_wrapped(|ui| {
                        Self::kpi_card(ui, "ADR", money(kpis.adr), "Room revenue / rooms sold");
                        Self::kpi_card(
                            ui,
                            "RevPAR",
                            money(kpis.revpar),
                            "Room revenue / rooms available",
                        );
                        Self::kpi_card(
                            ui,
                            "Occupancy",
                            format!("{:.2}%", kpis.occupancy),
                            "Rooms sold / rooms available",
                        );
                        Self::kpi_card(
                            ui,
                            "GOPPAR",
                            money(kpis.goppar),
                            "Gross operating profit / rooms available",
                        );
                        Self::kpi_card(
                            ui,
                            "TRevPAR",
                            money(kpis.trevpar),
                            "Total revenue / rooms available",
                        );
                    });

                    ui.add_space(8.0);

                    if let Some(rec) = self.recommendation.clone() {
                        self.show_recommendation(ui, &rec);
                    }

                    ui.add_space(10.0);
                    ui.separator();

                    self.show_simulation(ui);
                } else {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🛎").size(64.0).color(HEADING_COLOR));
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new("Enter tonight's figures and press Calculate")
                                .size(20.0)
                                .color(LABEL_COLOR),
                        );
                    });
                }
            });
        });
    }
}

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

fn field_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{value}")
    }
}
