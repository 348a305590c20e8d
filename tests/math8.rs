mod tests {
    use myrtio_poi_mode::math8::{blend8, progress8, scale8, triangle8, xorshift8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(progress8(0, 16), 0);
        assert_eq!(progress8(8, 16), 127);
        assert_eq!(progress8(16, 16), 255);
        assert_eq!(progress8(3, 0), 255);
    }

    #[test]
    fn test_triangle8() {
        assert_eq!(triangle8(0), 0);
        assert_eq!(triangle8(64), 128);
        assert_eq!(triangle8(127), 254);
        assert_eq!(triangle8(128), 254);
        assert_eq!(triangle8(255), 0);
    }

    #[test]
    fn test_xorshift8_never_zero() {
        let mut state = 0;
        for _ in 0..1000 {
            state = xorshift8(state);
            assert_ne!(state, 0);
        }
        assert_eq!(xorshift8(0x5A), xorshift8(0x5A));
    }
}
