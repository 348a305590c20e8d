mod tests {
    use myrtio_poi_mode::{PALETTE_SIZE, Palette};

    fn five() -> Palette {
        Palette::from_colors(&[10, 11, 12, 13, 14]).unwrap()
    }

    #[test]
    fn test_palette_rejects_bad_counts() {
        assert!(Palette::new([0; PALETTE_SIZE], 0).is_none());
        assert!(Palette::new([0; PALETTE_SIZE], 13).is_none());
        assert!(Palette::new([0; PALETTE_SIZE], 12).is_some());
        assert!(Palette::from_colors(&[]).is_none());
        assert!(Palette::from_colors(&[1; 13]).is_none());
    }

    #[test]
    fn test_palette_from_colors() {
        let palette = five();
        assert_eq!(palette.num_colors(), 5);
        assert_eq!(palette.colors(), &[10, 11, 12, 13, 14]);
        assert_eq!(&palette.slots()[5..], &[0; 7]);
    }

    #[test]
    fn test_color_at_wraps() {
        let palette = five();
        for index in 0..=250u8 {
            assert_eq!(palette.color_at(index), palette.color_at(index + 5));
        }
        assert_eq!(palette.color_at(7), 12);
    }

    #[test]
    fn test_advance_wraps() {
        let palette = five();
        assert_eq!(palette.advance(0), 1);
        assert_eq!(palette.advance(4), 0);
        assert_eq!(palette.advance(255), 1);
    }

    #[test]
    fn test_num_colors_change_keeps_hidden_slots() {
        let mut palette = five();
        assert!(!palette.set_num_colors(0));
        assert_eq!(palette.num_colors(), 5);

        assert!(palette.set_num_colors(2));
        assert_eq!(palette.colors(), &[10, 11]);
        assert_eq!(palette.color_at(2), 10);

        assert!(palette.set_num_colors(5));
        assert_eq!(palette.colors(), &[10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_set_color() {
        let mut palette = five();
        assert!(palette.set_color(11, 99));
        assert!(!palette.set_color(12, 99));
        assert_eq!(palette.slots()[11], 99);
    }
}
