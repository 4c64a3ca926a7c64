use super::*;

#[test]
fn scaled_darkens_and_clamps() {
    let c = Rgb8::new(200, 100, 10);
    assert_eq!(c.scaled(0.8), Rgb8::new(160, 80, 8));
    assert_eq!(c.scaled(2.0), Rgb8::new(255, 200, 20));
    assert_eq!(c.scaled(0.0), Rgb8::new(0, 0, 0));
}

#[test]
fn mean_rounds_per_channel() {
    let colors = [Rgb8::new(255, 0, 10), Rgb8::new(0, 0, 11)];
    assert_eq!(Rgb8::mean(colors.iter()), Some(Rgb8::new(128, 0, 11)));
    assert_eq!(Rgb8::mean(std::iter::empty()), None);
}

#[test]
fn canvas_byte_len_is_rgba8() {
    let c = Canvas {
        width: 3,
        height: 2,
    };
    assert_eq!(c.byte_len(), 24);
}
