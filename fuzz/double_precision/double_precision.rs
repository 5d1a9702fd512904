#![no_main]

use libfuzzer_sys::fuzz_target;
use mixfft::MixFft;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    size: u16,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 15100 {
        return;
    }
    let executor = if data.forward {
        MixFft::make_forward_fft_f64(data.size as usize).unwrap()
    } else {
        MixFft::make_inverse_fft_f64(data.size as usize).unwrap()
    };
    let mut chunk = vec![Complex::new(data.re, data.im); data.size as usize];
    executor.execute(&mut chunk).unwrap();
    let mut test_target = vec![Complex::new(data.re, data.im); data.size as usize];
    executor
        .execute_out_of_place(&chunk, &mut test_target)
        .unwrap();
    let mut scratch = vec![Complex::default(); executor.scratch_length()];
    executor
        .execute_with_scratch(&mut test_target, &mut scratch)
        .unwrap();
});
