//! Desktop preview app for myrtio-poi-mode
//!
//! Runs one mode at its real frame rate and draws the most recent frames
//! as a trail, the way a spinning poi paints them in the air. The mouse
//! stands in for the accelerometer.

use std::{collections::VecDeque, time::Instant as StdInstant};

use eframe::egui::{self};
use myrtio_poi_mode::{
    AccMode, AccSample, AccSensitivity, AccelerometerSource, FrameScheduler, Instant, Mode,
    ModeConfig, OutputDriver, Palette, Prime, Rgb, VariantConfig,
    color::{HUE_START, PASTEL_START, WHITE},
    prime::PRIME_COUNT,
};

/// Frames kept in the trail (0.8 s at 500 FPS)
const TRAIL_LENGTH: usize = 400;

/// Width of one trail column in pixels
const COLUMN_WIDTH: f32 = 2.0;

/// Height of the trail in pixels
const TRAIL_HEIGHT: f32 = 80.0;

/// Upper bound of frames rendered per UI update
const MAX_FRAMES_PER_UPDATE: usize = 2_000;

/// Reading while the shake button is held
const SHAKE_SAMPLE: AccSample = AccSample::new(0.0, 0.0, 3.0);

const ACC_MODES: [AccMode; 5] = [
    AccMode::Off,
    AccMode::Speed,
    AccMode::TiltX,
    AccMode::TiltY,
    AccMode::FlipZ,
];

const SENSITIVITIES: [AccSensitivity; 3] = [
    AccSensitivity::Low,
    AccSensitivity::Medium,
    AccSensitivity::High,
];

/// Output driver that remembers the latest frames
struct TrailDriver {
    trail: VecDeque<Rgb>,
}

impl OutputDriver for TrailDriver {
    fn write(&mut self, colors: &[Rgb]) {
        for color in colors {
            if self.trail.len() == TRAIL_LENGTH {
                self.trail.pop_back();
            }
            self.trail.push_front(*color);
        }
    }
}

/// Accelerometer driven by the UI
struct SimulatedSensor {
    sample: AccSample,
}

impl AccelerometerSource for SimulatedSensor {
    fn sample(&mut self) -> Option<AccSample> {
        Some(self.sample)
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("Poi Mode Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-poi-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

fn preview_config() -> ModeConfig {
    let rainbow = Palette::from_colors(&[
        HUE_START,
        HUE_START + 8,
        HUE_START + 16,
        HUE_START + 24,
        HUE_START + 32,
        HUE_START + 40,
    ]);
    let soft = Palette::from_colors(&[WHITE, PASTEL_START, PASTEL_START + 7]);
    let (Some(rainbow), Some(soft)) = (rainbow, soft) else {
        unreachable!("preview palettes are within capacity");
    };
    ModeConfig::new(
        AccMode::Speed,
        AccSensitivity::Medium,
        [
            VariantConfig::new(Prime::Strobe, rainbow),
            VariantConfig::new(Prime::Ribbon, soft),
        ],
    )
}

struct PreviewApp {
    /// The scheduler driving the mode
    scheduler: FrameScheduler<SimulatedSensor, TrailDriver>,
    /// Deadline of the next frame in synthetic time
    next_frame: Instant,

    /// Synthetic time in microseconds
    t_us: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,

    /// Reading reported while the shake button is released
    tilt: [f32; 3],
}

impl PreviewApp {
    fn new() -> Self {
        let scheduler = FrameScheduler::new(
            Mode::new(0, preview_config()),
            SimulatedSensor {
                sample: AccSample::new(0.0, 0.0, 1.0),
            },
            TrailDriver {
                trail: VecDeque::with_capacity(TRAIL_LENGTH),
            },
        );

        Self {
            scheduler,
            next_frame: Instant::from_ticks(0),
            t_us: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            tilt: [0.0, 0.0, 1.0],
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_us = delta.as_secs_f64() * 1_000_000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_us = if delta_us.is_finite() {
                delta_us.max(0.0) as u64
            } else {
                0
            };
            self.t_us = self.t_us.saturating_add(delta_us);
        }
    }

    /// Render every frame that fell due since the last update
    fn run_frames(&mut self) {
        let now = Instant::from_micros(self.t_us);
        let mut frames = 0;
        while self.next_frame <= now {
            if frames == MAX_FRAMES_PER_UPDATE {
                self.next_frame = now;
                break;
            }
            self.next_frame = self.scheduler.tick(self.next_frame).next_deadline;
            frames += 1;
        }
    }

    fn set_sample(&mut self, shaking: bool) {
        self.scheduler.sensor_mut().sample = if shaking {
            SHAKE_SAMPLE
        } else {
            AccSample::new(self.tilt[0], self.tilt[1], self.tilt[2])
        };
    }
}

fn prime_selector(ui: &mut egui::Ui, mode: &mut Mode, variant: u8) {
    let Some(current) = mode.variant(variant).map(|config| config.prime) else {
        return;
    };
    let mut selected = current;
    egui::ComboBox::from_id_salt(("prime_selector", variant))
        .selected_text(current.as_str())
        .show_ui(ui, |ui| {
            for prime in (0..PRIME_COUNT).filter_map(Prime::from_raw) {
                ui.selectable_value(&mut selected, prime, prime.as_str());
            }
        });
    if selected != current {
        let _ = mode.set_prime(variant, selected);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_frames();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.scheduler.mode_mut().reset();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);
                    ui.label(format!("Frame: {}", self.scheduler.mode().tick()));

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.05..=2.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <MotionControls>
                ui.vertical(|ui| {
                    let shaking = ui.button("Hold to shake").is_pointer_button_down_on();

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        for (label, axis) in ["x", "y", "z"].iter().zip(self.tilt.iter_mut()) {
                            ui.label(*label);
                            ui.add(egui::Slider::new(axis, -1.0..=1.0));
                        }
                    });
                    self.set_sample(shaking);

                    ui.add_space(4.0);
                    let mode = self.scheduler.mode_mut();
                    ui.horizontal(|ui| {
                        ui.label("Accelerometer:");
                        let mut acc_mode = mode.acc_mode();
                        egui::ComboBox::from_id_salt("acc_mode")
                            .selected_text(acc_mode.as_str())
                            .show_ui(ui, |ui| {
                                for option in ACC_MODES {
                                    ui.selectable_value(&mut acc_mode, option, option.as_str());
                                }
                            });
                        if acc_mode != mode.acc_mode() {
                            mode.set_acc_mode(acc_mode);
                        }

                        let mut sensitivity = mode.acc_sensitivity();
                        egui::ComboBox::from_id_salt("acc_sensitivity")
                            .selected_text(sensitivity.as_str())
                            .show_ui(ui, |ui| {
                                for option in SENSITIVITIES {
                                    ui.selectable_value(&mut sensitivity, option, option.as_str());
                                }
                            });
                        if sensitivity != mode.acc_sensitivity() {
                            mode.set_acc_sensitivity(sensitivity);
                        }
                    });
                });
                // </MotionControls>
            });

            ui.add_space(16.0);

            let mode = self.scheduler.mode_mut();
            for variant in 0..2u8 {
                ui.horizontal(|ui| {
                    let marker = if mode.cur_variant() == variant { "▶" } else { " " };
                    ui.label(format!("{marker} Variant {variant}:"));
                    prime_selector(ui, mode, variant);
                });
            }

            ui.add_space(4.0);
            ui.label(format!("Hysteresis: {}", mode.acc_counter()));
            ui.monospace(mode.summary().as_str());

            ui.add_space(16.0);

            // === Trail Display ===
            let available_width = ui.available_width();
            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, TRAIL_HEIGHT),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;
            painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in self.scheduler.output().trail.iter().enumerate() {
                let x = origin.x + i as f32 * COLUMN_WIDTH;
                if x > response.rect.max.x {
                    break;
                }
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, origin.y),
                    egui::vec2(COLUMN_WIDTH, TRAIL_HEIGHT),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 0.0, color);
            }
        });
    }
}
