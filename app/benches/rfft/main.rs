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
use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main};
use mixfft::{MixFft, RealFftPlan};
use rand::Rng;
use realfft::RealFftPlanner;
use rustfft::num_complex::Complex;
use std::time::Duration;

fn check_power_groups(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let mut input_power = vec![f32::default(); n];
    for z in input_power.iter_mut() {
        *z = rand::rng().random();
    }

    c.bench_function(format!("realfft {group}s").as_str(), |b| {
        let plan = RealFftPlanner::<f32>::new().plan_fft_forward(n);
        let mut working = input_power.to_vec();
        let mut output = plan.make_output_vec();
        b.iter(|| {
            plan.process(&mut working, &mut output).unwrap();
        })
    });

    c.bench_function(format!("mixfft {group}s").as_str(), |b| {
        let mut plan = RealFftPlan::<f32>::new(n).unwrap();
        let mut output = vec![Complex::new(0.0, 0.0); n / 2 + 1];
        b.iter(|| {
            plan.forward(&input_power, &mut output).unwrap();
        })
    });

    c.bench_function(format!("mixfft c2r {group}s").as_str(), |b| {
        let plan = MixFft::make_c2r_fft_f32(n).unwrap();
        let spectrum = vec![Complex::new(1.0, 0.0); n / 2 + 1];
        let mut output = vec![0f32; n];
        b.iter(|| {
            plan.execute(&spectrum, &mut output).unwrap();
        })
    });
}

fn check_power_groupd(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let mut input_power = vec![f64::default(); n];
    for z in input_power.iter_mut() {
        *z = rand::rng().random();
    }

    c.bench_function(format!("mixfft {group}d").as_str(), |b| {
        let plan = MixFft::make_r2c_fft_f64(input_power.len()).unwrap();
        let mut output = vec![Complex::new(0.0, 0.0); n / 2 + 1];
        let mut scratch = vec![Complex::new(0.0, 0.0); plan.complex_scratch_length()];
        b.iter(|| {
            plan.execute_with_scratch(&input_power, &mut output, &mut scratch)
                .unwrap();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("group");
    let c = group
        .measurement_time(Duration::from_millis(750))
        .warm_up_time(Duration::from_millis(750));

    for n in [8usize, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192] {
        check_power_groups(c, n, n.to_string());
        check_power_groupd(c, n, n.to_string());
    }
    for n in [480usize, 1000, 1800] {
        check_power_groups(c, n, n.to_string());
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
