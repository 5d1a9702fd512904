#![no_main]

use libfuzzer_sys::fuzz_target;
use mixfft::{FactorFlags, MixFft, factor};
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    size: u16,
    re: f32,
    im: f32,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 15100 {
        return;
    }
    let size = data.size as usize;
    let plan = factor(size, FactorFlags::EightFirstStage).unwrap();
    assert_eq!(
        plan.stages().iter().map(|s| s.radix).product::<usize>(),
        size
    );
    let executor = if data.forward {
        MixFft::make_forward_fft_f32(size).unwrap()
    } else {
        MixFft::make_inverse_fft_f32(size).unwrap()
    };
    let mut chunk = vec![Complex::new(data.re, data.im); size];
    executor.execute(&mut chunk).unwrap();
    let mut test_target = vec![Complex::new(data.re, data.im); size];
    executor
        .execute_out_of_place(&chunk, &mut test_target)
        .unwrap();
});
