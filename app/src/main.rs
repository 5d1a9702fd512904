/*
 * // Copyright (c) The mixfft developers 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use log::info;
use mixfft::{MixFft, PackedRealFft, SpectrumLayout};
use num_traits::Float;
use rand::Rng;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Stats {
    pub samples: usize,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
}

/// Runs `f` in batches until a few timing samples are collected.
pub fn bench<F, R>(name: &str, mut f: F) -> Stats
where
    F: FnMut() -> R,
{
    let warmup = Duration::from_millis(25);
    let target_sample_time = Duration::from_millis(50);
    let max_samples = 7usize;

    let start = Instant::now();
    while Instant::now() - start < warmup {
        black_box(&f());
    }

    let mut samples: Vec<Duration> = Vec::new();
    let mut iters = 1usize;
    while samples.len() < max_samples {
        let t0 = Instant::now();
        for _ in 0..iters {
            black_box(&f());
        }
        let elapsed = Instant::now() - t0;
        samples.push(elapsed / (iters as u32));

        if elapsed < target_sample_time {
            let ratio = (target_sample_time.as_secs_f64() / elapsed.as_secs_f64()).max(1.0);
            iters = iters.saturating_mul((ratio * 1.5) as usize).clamp(1, 1_000_000);
        }
    }

    samples.sort();
    let stats = Stats {
        samples: samples.len(),
        median: samples[samples.len() / 2],
        min: samples[0],
        max: samples[samples.len() - 1],
    };
    println!(
        "bench '{}': {} samples, median = {:?}, min = {:?}, max = {:?}",
        name, stats.samples, stats.median, stats.min, stats.max
    );
    stats
}

fn max_error<T: Float>(a: &[Complex<T>], b: &[Complex<T>]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(T::zero(), T::max)
}

fn compare_r2c(n: usize) {
    let input = (0..n)
        .map(|_| rand::rng().random_range(-1.0f32..1.0))
        .collect::<Vec<_>>();

    let mine = MixFft::make_r2c_fft_f32(n).unwrap();
    let mut spectrum = vec![Complex::<f32>::default(); mine.complex_length()];
    mine.execute(&input, &mut spectrum).unwrap();

    let reference = RealFftPlanner::<f32>::new().plan_fft_forward(n);
    let mut reference_input = input.to_vec();
    let mut reference_spectrum = reference.make_output_vec();
    reference
        .process(&mut reference_input, &mut reference_spectrum)
        .unwrap();

    let inverse = MixFft::make_c2r_fft_f32(n).unwrap();
    let mut restored = vec![0f32; n];
    inverse.execute(&spectrum, &mut restored).unwrap();
    let round_trip = restored
        .iter()
        .zip(input.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0f32, f32::max);

    println!(
        "r2c {n}: max error vs realfft {:e}, round trip {:e}",
        max_error(&spectrum, &reference_spectrum),
        round_trip
    );

    bench(format!("mixfft r2c {n}").as_str(), || {
        mine.execute(&input, &mut spectrum).unwrap();
    });
    bench(format!("realfft r2c {n}").as_str(), || {
        reference
            .process(&mut reference_input, &mut reference_spectrum)
            .unwrap();
    });
}

fn compare_c2c(n: usize) {
    let mut input = vec![Complex::<f64>::default(); n];
    for z in input.iter_mut() {
        *z = Complex {
            re: rand::rng().random_range(-1.0..1.0),
            im: rand::rng().random_range(-1.0..1.0),
        };
    }

    let forward = MixFft::make_forward_fft_f64(n).unwrap();
    let mut mine = input.to_vec();
    forward.execute(&mut mine).unwrap();

    let mut reference = input.to_vec();
    FftPlanner::new().plan_fft_forward(n).process(&mut reference);

    println!(
        "c2c {n}: max error vs rustfft {:e}",
        max_error(&mine, &reference)
    );
}

fn check_layouts(n: usize) {
    let input = (0..n)
        .map(|_| rand::rng().random_range(-1.0f32..1.0))
        .collect::<Vec<_>>();
    for layout in [
        SpectrumLayout::HalfComplex,
        SpectrumLayout::Perm,
        SpectrumLayout::Ccs,
    ] {
        let mut fft = PackedRealFft::<f32>::new(n, layout).unwrap();
        let mut packed = vec![0f32; fft.packed_length()];
        let mut restored = vec![0f32; n];
        fft.forward(&input, &mut packed).unwrap();
        fft.inverse(&packed, &mut restored).unwrap();
        let error = restored
            .iter()
            .zip(input.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0f32, f32::max);
        println!("{layout:?} {n}: round trip {error:e}");
    }
}

fn main() {
    env_logger::init();

    for n in [16usize, 256, 1024, 4096, 480, 1000] {
        info!("Comparing length {n}");
        compare_r2c(n);
        compare_c2c(n);
    }
    check_layouts(4096);
}
