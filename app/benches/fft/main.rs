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
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mixfft::MixFft;
use rand::Rng;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

fn check_power_group(c: &mut Criterion, n: usize, group: String) {
    let mut input_power = vec![Complex::<f64>::default(); n];
    for z in input_power.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: rand::rng().random(),
        };
    }

    c.bench_function(format!("rustfft {group}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(input_power.len());
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("mixfft {group}").as_str(), |b| {
        let plan = MixFft::make_forward_fft_f64(input_power.len()).unwrap();
        let mut working = input_power.to_vec();
        let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
        b.iter(|| {
            plan.execute_with_scratch(&mut working, &mut scratch).unwrap();
        })
    });

    let single = input_power
        .iter()
        .map(|&x| Complex::new(x.re as f32, x.im as f32))
        .collect::<Vec<_>>();

    c.bench_function(format!("rustfft {group}s").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(single.len());
        let mut working = single.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("mixfft {group}s").as_str(), |b| {
        let plan = MixFft::make_forward_fft_f32(single.len()).unwrap();
        let mut working = single.to_vec();
        let mut scratch = vec![Complex::<f32>::default(); plan.scratch_length()];
        b.iter(|| {
            plan.execute_with_scratch(&mut working, &mut scratch).unwrap();
        })
    });
}

pub fn bench_mixfft_averages(c: &mut Criterion) {
    c.bench_function("mixfft even sizes 500..1500", |b| {
        b.iter_batched(
            || {
                (250..=750)
                    .map(|half| {
                        let n = half * 2;
                        let input: Vec<Complex<f32>> =
                            (0..n).map(|i| Complex::new(i as f32, 0.0)).collect();
                        let fft = MixFft::make_forward_fft_f32(n).unwrap();
                        (input, fft)
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (i, (input, fft)) in plans_and_inputs.iter().enumerate() {
                    let mut c = input.to_vec();
                    if let Err(err) = fft.execute(&mut c) {
                        panic!("err: {err} on {i}");
                    }
                }
            },
            BatchSize::LargeInput,
        );
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for n in [8usize, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384] {
        check_power_group(c, n, n.to_string());
    }
    for n in [60usize, 120, 480, 1000, 1296] {
        check_power_group(c, n, n.to_string());
    }
    bench_mixfft_averages(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
