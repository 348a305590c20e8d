mod tests {
    use myrtio_poi_mode::{
        AccMode, AccSample, AccSensitivity, AccelerometerSource, Duration, FrameScheduler,
        Instant, Mode, ModeConfig, OutputDriver, Palette, Prime, Rgb, VariantConfig,
        color::{HUE_START, WHITE},
        unpack_color,
    };

    struct RecordingDriver {
        frames: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.extend_from_slice(colors);
        }
    }

    /// Sensor that reports the same reading every frame
    struct SteadySensor(Option<AccSample>);

    impl AccelerometerSource for SteadySensor {
        fn sample(&mut self) -> Option<AccSample> {
            self.0
        }
    }

    fn scheduler(sample: Option<AccSample>) -> FrameScheduler<SteadySensor, RecordingDriver> {
        let config = ModeConfig::new(
            AccMode::Speed,
            AccSensitivity::Medium,
            [
                VariantConfig::new(Prime::Ribbon, Palette::from_colors(&[HUE_START]).unwrap()),
                VariantConfig::new(Prime::Ribbon, Palette::from_colors(&[WHITE]).unwrap()),
            ],
        );
        FrameScheduler::new(
            Mode::new(0, config),
            SteadySensor(sample),
            RecordingDriver { frames: Vec::new() },
        )
    }

    #[test]
    fn test_on_time_frames() {
        let mut scheduler = scheduler(None);
        let result = scheduler.tick(Instant::from_micros(0));
        assert_eq!(result.next_deadline, Instant::from_micros(2000));
        assert_eq!(result.sleep_duration, Duration::from_micros(2000));

        let result = scheduler.tick(Instant::from_micros(2500));
        assert_eq!(result.next_deadline, Instant::from_micros(4000));
        assert_eq!(result.sleep_duration, Duration::from_micros(1500));
        assert_eq!(scheduler.mode().tick(), 2);
        assert_eq!(scheduler.output().frames.len(), 2);
    }

    #[test]
    fn test_slightly_late_frame_catches_up() {
        let mut scheduler = scheduler(None);
        scheduler.tick(Instant::from_micros(0));
        let result = scheduler.tick(Instant::from_micros(5000));
        assert_eq!(result.next_deadline, Instant::from_micros(4000));
        assert_eq!(result.sleep_duration, Duration::from_ticks(0));
    }

    #[test]
    fn test_backlog_is_skipped() {
        let mut scheduler = scheduler(None);
        scheduler.tick(Instant::from_micros(0));
        let result = scheduler.tick(Instant::from_micros(100_000));
        assert_eq!(result.next_deadline, Instant::from_micros(102_000));
        assert_eq!(result.sleep_duration, Duration::from_micros(2000));
        assert_eq!(scheduler.mode().tick(), 2);
    }

    #[test]
    fn test_samples_drive_variant() {
        let mut scheduler = scheduler(Some(AccSample::new(0.0, 0.0, 3.0)));
        for frame in 0..6u64 {
            scheduler.tick(Instant::from_micros(frame * 2000));
        }
        let (mode, _, driver) = scheduler.into_parts();
        assert_eq!(mode.cur_variant(), 1);
        assert_eq!(driver.frames.len(), 6);
        assert_eq!(driver.frames[0], unpack_color(HUE_START));
        assert_eq!(driver.frames[5], unpack_color(WHITE));
    }

    #[test]
    fn test_custom_frame_duration() {
        let config = ModeConfig::new(
            AccMode::Off,
            AccSensitivity::Medium,
            [VariantConfig::new(Prime::Strobe, Palette::from_colors(&[WHITE]).unwrap()); 2],
        );
        let mut scheduler = FrameScheduler::with_frame_duration(
            Mode::new(0, config),
            SteadySensor(None),
            RecordingDriver { frames: Vec::new() },
            Duration::from_millis(10),
        );
        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
        scheduler.mode_mut().set_variant(1).unwrap();
        assert_eq!(scheduler.mode().cur_variant(), 1);
    }
}
