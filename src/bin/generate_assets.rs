//! Placeholder asset generator
//!
//! Generates the textures and audio the game loads at runtime:
//! background, ground strip, obstacle, the 9-frame player sheet, the
//! looping music track, and the jump sound. Run once before the first
//! `cargo run`.

use image::{Rgba, RgbaImage};
use std::f32::consts::PI;
use std::fs;

const TEXTURE_DIR: &str = "assets/textures";
const AUDIO_DIR: &str = "assets/audio";

const WORLD_W: u32 = 800;
const WORLD_H: u32 = 600;
const GROUND_H: u32 = 64;
const OBSTACLE_SIZE: u32 = 32;
const FRAME_W: u32 = 32;
const FRAME_H: u32 = 48;
const FRAME_COUNT: u32 = 9;

const SAMPLE_RATE: u32 = 22050;

fn main() {
    fs::create_dir_all(TEXTURE_DIR).expect("Failed to create texture directory");
    fs::create_dir_all(AUDIO_DIR).expect("Failed to create audio directory");

    println!("Generating textures...");
    generate_background();
    generate_ground();
    generate_obstacle();
    generate_player_sheet();

    println!("Generating audio...");
    generate_music();
    generate_jump_sfx();

    println!("Done.");
}

/// Cheap deterministic per-pixel noise for speckle and dithering
fn hash_noise(x: u32, y: u32) -> f32 {
    let mut n = x.wrapping_mul(374_761_393).wrapping_add(y.wrapping_mul(668_265_263));
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    (n ^ (n >> 16)) as f32 / u32::MAX as f32
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn mix(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    [
        lerp(a[0] as f32, b[0] as f32, t) as u8,
        lerp(a[1] as f32, b[1] as f32, t) as u8,
        lerp(a[2] as f32, b[2] as f32, t) as u8,
    ]
}

/// Sky gradient with two layers of rolling hills
fn generate_background() {
    let sky_top = [96u8, 170, 232];
    let sky_bottom = [196u8, 226, 246];
    let hill_far = [140u8, 185, 140];
    let hill_near = [96u8, 156, 96];

    let mut img = RgbaImage::new(WORLD_W, WORLD_H);

    for y in 0..WORLD_H {
        let t = y as f32 / WORLD_H as f32;
        let sky = mix(sky_top, sky_bottom, t);

        for x in 0..WORLD_W {
            let fx = x as f32;

            // Hill silhouettes; both layers repeat cleanly across the width
            let far_top = 380.0 + 40.0 * (fx * 2.0 * PI / WORLD_W as f32 * 2.0).sin();
            let near_top = 460.0 + 30.0 * (fx * 2.0 * PI / WORLD_W as f32 * 3.0 + 1.3).sin();

            let fy = y as f32;
            let color = if fy > near_top {
                hill_near
            } else if fy > far_top {
                hill_far
            } else {
                sky
            };

            img.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
        }
    }

    let path = format!("{}/background.png", TEXTURE_DIR);
    img.save(&path).expect("Failed to save background");
    println!("  Created: {}", path);
}

/// Grass-topped dirt strip
fn generate_ground() {
    let grass = [88u8, 160, 66];
    let grass_dark = [70u8, 132, 52];
    let dirt = [130u8, 96, 60];
    let dirt_dark = [104u8, 74, 44];

    let mut img = RgbaImage::new(WORLD_W, GROUND_H);

    for y in 0..GROUND_H {
        for x in 0..WORLD_W {
            let noise = hash_noise(x, y);
            let color = if y < 12 {
                if noise > 0.7 { grass_dark } else { grass }
            } else if noise > 0.85 {
                dirt_dark
            } else {
                dirt
            };
            img.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
        }
    }

    let path = format!("{}/platform.png", TEXTURE_DIR);
    img.save(&path).expect("Failed to save ground");
    println!("  Created: {}", path);
}

/// Braced wooden crate
fn generate_obstacle() {
    let wood = [168u8, 120, 64];
    let wood_dark = [124u8, 86, 44];
    let frame = [92u8, 62, 30];

    let mut img = RgbaImage::new(OBSTACLE_SIZE, OBSTACLE_SIZE);
    let max = OBSTACLE_SIZE - 1;

    for y in 0..OBSTACLE_SIZE {
        for x in 0..OBSTACLE_SIZE {
            let on_edge = x < 3 || y < 3 || x > max - 3 || y > max - 3;
            // Diagonal cross brace, 2px wide
            let on_brace = x.abs_diff(y) < 2 || (max - x).abs_diff(y) < 2;

            let color = if on_edge || on_brace {
                frame
            } else if hash_noise(x, y) > 0.8 {
                wood_dark
            } else {
                wood
            };
            img.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
        }
    }

    let path = format!("{}/obstacle.png", TEXTURE_DIR);
    img.save(&path).expect("Failed to save obstacle");
    println!("  Created: {}", path);
}

/// 9-frame sheet: frames 0-3 run left, 4 idle, 5-8 run right
fn generate_player_sheet() {
    let mut img = RgbaImage::new(FRAME_W * FRAME_COUNT, FRAME_H);

    for frame in 0..FRAME_COUNT {
        let (facing, phase) = match frame {
            0..=3 => (-1.0, frame as f32 / 4.0),
            4 => (0.0, 0.0),
            _ => (1.0, (frame - 5) as f32 / 4.0),
        };
        draw_player_frame(&mut img, frame * FRAME_W, facing, phase);
    }

    let path = format!("{}/player.png", TEXTURE_DIR);
    img.save(&path).expect("Failed to save player sheet");
    println!("  Created: {}", path);
}

/// Draw one frame at the given x offset.
/// `facing` is -1 left, 0 camera, 1 right; `phase` is the run cycle 0..1.
fn draw_player_frame(img: &mut RgbaImage, x0: u32, facing: f32, phase: f32) {
    let shirt = [224u8, 84, 64];
    let skin = [240u8, 198, 160];
    let pants = [52u8, 72, 120];
    let outline = [30u8, 30, 30];

    let cx = FRAME_W as f32 / 2.0;
    let swing = (phase * 2.0 * PI).sin();

    for y in 0..FRAME_H {
        for x in 0..FRAME_W {
            let fx = x as f32 - cx;
            let fy = y as f32;

            // Head: circle centered near the top, shifted by facing
            let head_cx = facing * 2.0;
            let head_d = ((fx - head_cx).powi(2) + (fy - 8.0).powi(2)).sqrt();

            // Torso: rounded rectangle
            let in_torso = fx.abs() < 7.0 && (16.0..34.0).contains(&fy);

            // Legs: two bars swinging in opposite phase
            let leg_spread = swing * 5.0;
            let in_front_leg = (fx - leg_spread).abs() < 3.0 && fy >= 34.0;
            let in_back_leg = (fx + leg_spread).abs() < 3.0 && fy >= 34.0;

            let color = if head_d < 6.0 {
                Some(skin)
            } else if head_d < 7.0 {
                Some(outline)
            } else if in_torso {
                Some(shirt)
            } else if in_front_leg || in_back_leg {
                Some(pants)
            } else {
                None
            };

            if let Some(c) = color {
                img.put_pixel(x0 + x, y, Rgba([c[0], c[1], c[2], 255]));
            }
        }
    }

    // Eye dot marks the facing direction (skip for the camera-facing frame)
    if facing != 0.0 {
        let eye_x = (cx + facing * 4.0) as u32;
        img.put_pixel(x0 + eye_x, 7, Rgba([30, 30, 30, 255]));
    }
}

/// Note frequency from semitone offset relative to A4
fn note(semitones: i32) -> f32 {
    440.0 * 2.0_f32.powf(semitones as f32 / 12.0)
}

/// Write mono 16-bit samples produced by `sample_fn(t)` in -1..1
fn write_wav(path: &str, duration_secs: f32, sample_fn: impl Fn(f32) -> f32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    let total = (duration_secs * SAMPLE_RATE as f32) as u32;

    for i in 0..total {
        let t = i as f32 / SAMPLE_RATE as f32;
        let sample = sample_fn(t).clamp(-1.0, 1.0);
        writer
            .write_sample((sample * i16::MAX as f32 * 0.8) as i16)
            .expect("Failed to write sample");
    }

    writer.finalize().expect("Failed to finalize WAV");
    println!("  Created: {}", path);
}

/// Eight-bar loop: a plain square-wave melody over a root drone
fn generate_music() {
    // A minor pentatonic phrase, two beats per note at 120 bpm
    let melody: [i32; 16] = [0, 3, 5, 7, 5, 3, 0, -2, 0, 3, 7, 10, 7, 5, 3, 0];
    let beat = 0.5;
    let duration = melody.len() as f32 * beat;

    let path = format!("{}/background_music.wav", AUDIO_DIR);
    write_wav(&path, duration, move |t| {
        let idx = ((t / beat) as usize).min(melody.len() - 1);
        let freq = note(melody[idx]);
        let note_t = t % beat;

        // Soft attack and release keep the loop from clicking
        let env = (note_t * 40.0).min(1.0) * (1.0 - (note_t / beat).powi(4));

        let square = if (t * freq).fract() < 0.5 { 1.0 } else { -1.0 };
        let drone = (2.0 * PI * note(-12) * t).sin();

        (square * 0.25 + drone * 0.15) * env
    });
}

/// Short rising chirp with an exponential decay
fn generate_jump_sfx() {
    let path = format!("{}/jump.wav", AUDIO_DIR);
    write_wav(&path, 0.25, |t| {
        let freq = lerp(300.0, 800.0, t / 0.25);
        let env = (-t * 14.0).exp();
        (2.0 * PI * freq * t).sin() * env
    });
}
