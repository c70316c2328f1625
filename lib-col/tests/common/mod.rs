use glam::{Vec2, vec2};
use lib_col::Aabb;

const TRANSLATION_COUNT: usize = 10;
const OUT_IMG_WIDTH: u32 = 1024;
const OUT_IMG_HEIGHT: u32 = 1024;
const OUT_IMG_SCALE: f32 = 2.0;

/// An interface for a test case. All tests in this crate have one
/// thing in common. Their result must be the same if the scene gets
/// moved by some offset.
pub trait TestCase: Copy {
    /// The name of the test to use in the test report.
    fn name(&self) -> &'static str;

    /// Run the test and return success of failure.
    /// If you have a super helpful problem to report that
    /// the calling code can't see -- print it to stdout.
    fn check(&self) -> bool;

    /// Draw a visual aid to `canvas`.
    fn draw(&self, canvas: &mut image::RgbImage);
}

pub trait FuzzableTestCase: TestCase + Copy {
    /// Move the whole scene by `delta`.
    fn translate(self, delta: Vec2) -> Self;
}

#[allow(dead_code)]
pub fn run_tests_no_fuzz<T: TestCase>(tests: impl IntoIterator<Item = T>) {
    for case in tests.into_iter() {
        println!("Running {:?}", case.name());
        if !case.check() {
            draw_test(&case);
            panic!("Test {:?} failed. Visual aid dumped.", case.name());
        }
    }
}

#[allow(dead_code)]
pub fn run_tests<T: FuzzableTestCase>(tests: impl IntoIterator<Item = T>) {
    let extended = tests.into_iter().flat_map(translate_test);
    for case in extended {
        println!("Running {:?}", case.name());
        if !case.check() {
            draw_test(&case);
            panic!("Test {:?} failed. Visual aid dumped.", case.name());
        }
    }
}

/// Generates a few copies of the same test, but moves each one by a
/// random offset. Offsets are whole numbers so that touching edges
/// stay exactly touching.
fn translate_test<T: FuzzableTestCase>(case: T) -> impl IntoIterator<Item = T> {
    let original_case = case;
    let cases = std::iter::repeat_n(case, TRANSLATION_COUNT)
        .map(|case| case.translate(random_translation()));
    std::iter::once(original_case).chain(cases)
}

fn random_translation() -> Vec2 {
    let trans_x = rand::random_range(-64..64);
    let trans_y = rand::random_range(-64..64);

    vec2(trans_x as f32, trans_y as f32)
}

fn draw_test<T: TestCase>(case: &T) {
    let mut img = image::RgbImage::new(OUT_IMG_WIDTH, OUT_IMG_HEIGHT);
    img.fill(0);
    case.draw(&mut img);
    img.save_with_format("test-out.png", image::ImageFormat::Png)
        .unwrap();
}

#[allow(dead_code)]
pub fn draw_aabb(canvas: &mut image::RgbImage, color: image::Rgb<u8>, aabb: Aabb) {
    let origin = vec2(OUT_IMG_WIDTH as f32 / 4.0, OUT_IMG_HEIGHT as f32 / 4.0);
    let min = origin + aabb.min * OUT_IMG_SCALE;
    let max = origin + aabb.max * OUT_IMG_SCALE;
    let points = [
        vec2(min.x, min.y),
        vec2(max.x, min.y),
        vec2(max.x, max.y),
        vec2(min.x, max.y),
    ]
    .map(|v| imageproc::point::Point { x: v.x, y: v.y });

    imageproc::drawing::draw_hollow_polygon_mut(canvas, &points, color);
}
