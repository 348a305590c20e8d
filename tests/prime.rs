mod tests {
    use myrtio_poi_mode::{
        Palette, Prime, Rgb,
        color::{HUE_START, WHITE, blend_colors},
        math8::progress8,
        prime::PRIME_COUNT,
        unpack_color,
    };

    const RED: u8 = HUE_START;
    const GREEN: u8 = HUE_START + 16;
    const BLUE: u8 = HUE_START + 32;
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Render `frames` frames of a fresh primitive, Mode-style
    fn run(prime: Prime, palette: &Palette, frames: usize) -> (Vec<Rgb>, u8) {
        let mut slot = prime.to_slot();
        let mut cursor = 0u8;
        let mut out = Vec::with_capacity(frames);
        for tick in 0..frames {
            cursor %= palette.num_colors();
            out.push(slot.render(tick as u32, palette, &mut cursor));
        }
        (out, cursor)
    }

    fn rgb() -> Palette {
        Palette::from_colors(&[RED, GREEN, BLUE]).unwrap()
    }

    #[test]
    fn test_prime_ids() {
        for raw in 0..PRIME_COUNT {
            let prime = Prime::from_raw(raw).unwrap();
            assert_eq!(prime.as_raw(), raw);
            assert_eq!(prime.to_slot().id(), prime);
        }
        assert_eq!(Prime::from_raw(PRIME_COUNT), None);
        assert_eq!(Prime::from_raw(255), None);
    }

    #[test]
    fn test_prime_names() {
        for raw in 0..PRIME_COUNT {
            let prime = Prime::from_raw(raw).unwrap();
            assert_eq!(Prime::parse_from_str(prime.as_str()), Some(prime));
        }
        assert_eq!(Prime::parse_from_str("dashpops"), Some(Prime::DashPops));
        assert_eq!(Prime::parse_from_str("ravin"), Some(Prime::Ravin));
        assert_eq!(Prime::parse_from_str("unknown"), None);
    }

    #[test]
    fn test_fresh_counters() {
        for raw in 0..PRIME_COUNT {
            let prime = Prime::from_raw(raw).unwrap();
            let expected = if prime == Prime::Lego { [0, 0x5A] } else { [0, 0] };
            assert_eq!(prime.to_slot().counters(), expected, "{prime}");
        }
    }

    #[test]
    fn test_blink_timings() {
        let palette = rgb();
        let timings = [
            (Prime::Strobe, 5, 8),
            (Prime::Hyper, 17, 17),
            (Prime::Strobie, 3, 23),
            (Prime::Seizure, 5, 95),
        ];
        for (prime, on, off) in timings {
            let period = on + off;
            let (frames, cursor) = run(prime, &palette, period * 2 + on);
            assert!(frames[..on].iter().all(|c| *c == unpack_color(RED)), "{prime}");
            assert!(frames[on..period].iter().all(|c| *c == BLACK), "{prime}");
            assert!(
                frames[period..period + on]
                    .iter()
                    .all(|c| *c == unpack_color(GREEN)),
                "{prime}"
            );
            assert!(frames[period + on..period * 2].iter().all(|c| *c == BLACK), "{prime}");
            assert!(
                frames[period * 2..].iter().all(|c| *c == unpack_color(BLUE)),
                "{prime}"
            );
            assert_eq!(cursor, 2, "{prime}");
        }
    }

    #[test]
    fn test_ribbon_is_never_dark() {
        let palette = rgb();
        let (frames, _) = run(Prime::Ribbon, &palette, 33);
        assert!(frames[..11].iter().all(|c| *c == unpack_color(RED)));
        assert!(frames[11..22].iter().all(|c| *c == unpack_color(GREEN)));
        assert!(frames[22..].iter().all(|c| *c == unpack_color(BLUE)));
    }

    #[test]
    fn test_pops() {
        let palette = rgb();
        let (frames, cursor) = run(Prime::Pops, &palette, 70);
        let lit = frames.iter().filter(|c| **c != BLACK).count();
        assert_eq!(lit, 6);
        assert_eq!(frames[10], unpack_color(RED));
        assert!(frames[30..].iter().all(|c| *c == BLACK));
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_dashpops() {
        let palette = rgb();
        let (frames, _) = run(Prime::DashPops, &palette, 50);
        assert!(frames[..20].iter().all(|c| *c == unpack_color(RED)));
        assert!(frames[20..28].iter().all(|c| *c == BLACK));
        assert_eq!(frames[28], unpack_color(GREEN));
        assert_eq!(frames[29], unpack_color(GREEN));
        assert_eq!(frames[30], BLACK);
        assert_eq!(frames[38], unpack_color(BLUE));
        assert_eq!(frames[48], unpack_color(RED));
    }

    #[test]
    fn test_tracer() {
        let palette = Palette::from_colors(&[RED, GREEN]).unwrap();
        let (frames, _) = run(Prime::Tracer, &palette, 13);
        assert!(frames[..3].iter().all(|c| *c == unpack_color(GREEN)));
        assert!(frames[3..10].iter().all(|c| *c == unpack_color(RED)));
        assert_eq!(frames[10], unpack_color(GREEN));

        let single = Palette::from_colors(&[WHITE]).unwrap();
        let (frames, _) = run(Prime::Tracer, &single, 20);
        assert!(frames.iter().all(|c| *c == unpack_color(WHITE)));
    }

    #[test]
    fn test_blinke() {
        let palette = Palette::from_colors(&[RED, GREEN]).unwrap();
        let (frames, cursor) = run(Prime::Blinke, &palette, 63);
        assert!(frames[..3].iter().all(|c| *c == unpack_color(RED)));
        assert!(frames[3..6].iter().all(|c| *c == BLACK));
        assert!(frames[6..9].iter().all(|c| *c == unpack_color(GREEN)));
        assert!(frames[9..62].iter().all(|c| *c == BLACK));
        assert_eq!(frames[62], unpack_color(RED));
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_edge_walk() {
        let palette = rgb();
        let (frames, _) = run(Prime::Edge, &palette, 29);
        assert!(frames[..2].iter().all(|c| *c == unpack_color(BLUE)));
        assert!(frames[2..6].iter().all(|c| *c == unpack_color(GREEN)));
        assert!(frames[6..12].iter().all(|c| *c == unpack_color(RED)));
        assert!(frames[12..16].iter().all(|c| *c == unpack_color(GREEN)));
        assert!(frames[16..28].iter().all(|c| *c == BLACK));
        assert_eq!(frames[28], unpack_color(BLUE));
    }

    #[test]
    fn test_chase_shrinks() {
        let palette = rgb();
        let (frames, cursor) = run(Prime::Chase, &palette, 50);
        for (step, window) in frames.chunks(10).enumerate() {
            let lit = window.iter().filter(|c| **c != BLACK).count();
            assert_eq!(lit, 10 - 2 * step);
        }
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_morph_blends_forward() {
        let palette = rgb();
        let (frames, _) = run(Prime::Morph, &palette, 20);
        assert_eq!(frames[0], unpack_color(RED));
        assert_eq!(frames[5], BLACK);
        assert_eq!(
            frames[15],
            blend_colors(unpack_color(RED), unpack_color(GREEN), progress8(1, 16))
        );
    }

    #[test]
    fn test_candy_window() {
        let palette = rgb();
        let (frames, _) = run(Prime::Candy, &palette, 13 * 12);
        let strobes: Vec<Rgb> = frames.chunks(13).map(|window| window[0]).collect();
        let (r, g, b) = (unpack_color(RED), unpack_color(GREEN), unpack_color(BLUE));
        assert_eq!(strobes, vec![r, g, b, r, g, b, r, g, b, g, b, r]);
    }

    #[test]
    fn test_pulse_ramp() {
        let palette = rgb();
        let (frames, cursor) = run(Prime::Pulse, &palette, 160);
        assert_eq!(frames[0], BLACK);
        assert_eq!(frames[50].r, 254);
        for pair in frames[..51].windows(2) {
            assert!(pair[0].r <= pair[1].r);
        }
        for pair in frames[50..100].windows(2) {
            assert!(pair[0].r >= pair[1].r);
        }
        assert!(frames[99].r < 10);

        // The next color starts its own ramp from black.
        assert_eq!(frames[100], BLACK);
        assert!(frames[150].g > 200);
        assert_eq!(frames[150].r, 0);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_ravin_follows_tick() {
        let palette = Palette::from_colors(&[WHITE]).unwrap();
        let mut slot = Prime::Ravin.to_slot();
        let mut cursor = 0;
        assert_eq!(
            slot.render(256, &palette, &mut cursor),
            Rgb {
                r: 254,
                g: 254,
                b: 254
            }
        );
        assert_eq!(slot.render(0, &palette, &mut cursor), BLACK);
    }

    #[test]
    fn test_lego_is_deterministic() {
        let palette = rgb();
        let (first, _) = run(Prime::Lego, &palette, 500);
        let (second, _) = run(Prime::Lego, &palette, 500);
        assert_eq!(first, second);
        assert!(first.iter().any(|c| *c != BLACK));
    }

    #[test]
    fn test_lego_blink_lengths() {
        let palette = Palette::from_colors(&[WHITE]).unwrap();
        let (frames, _) = run(Prime::Lego, &palette, 2000);

        let mut runs: Vec<(bool, usize)> = Vec::new();
        for frame in &frames {
            let lit = *frame != BLACK;
            match runs.last_mut() {
                Some((last_lit, len)) if *last_lit == lit => *len += 1,
                _ => runs.push((lit, 1)),
            }
        }
        // The final run may be cut short.
        runs.pop();

        assert!(runs[0].0);
        for (lit, len) in &runs {
            if *lit {
                assert!([2, 8, 16].contains(len), "lit for {len} frames");
            } else {
                assert_eq!(*len, 8);
            }
        }
        for expected in [2, 8, 16] {
            assert!(runs.iter().any(|(lit, len)| *lit && *len == expected));
        }
    }

    #[test]
    fn test_restore_resumes() {
        let palette = rgb();
        for raw in 0..PRIME_COUNT {
            let prime = Prime::from_raw(raw).unwrap();
            let mut slot = prime.to_slot();
            let mut cursor = 0;
            for tick in 0..77 {
                slot.render(tick, &palette, &mut cursor);
            }
            let [counter0, counter1] = slot.counters();
            let mut resumed = prime.restore(counter0, counter1);
            let mut resumed_cursor = cursor;
            for tick in 77..300 {
                assert_eq!(
                    slot.render(tick, &palette, &mut cursor),
                    resumed.render(tick, &palette, &mut resumed_cursor),
                    "{prime}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_counters_are_safe() {
        let palette = rgb();
        for raw in 0..PRIME_COUNT {
            let prime = Prime::from_raw(raw).unwrap();
            for (counter0, counter1) in [(-128, -128), (127, 127), (-1, 99)] {
                let mut slot = prime.restore(counter0, counter1);
                let mut cursor = 2;
                for tick in 0..200 {
                    slot.render(tick, &palette, &mut cursor);
                    assert!(cursor < palette.num_colors());
                }
            }
        }
    }
}
