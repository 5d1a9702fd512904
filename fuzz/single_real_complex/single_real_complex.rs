#![no_main]

use libfuzzer_sys::fuzz_target;
use mixfft::{MixFft, PackedRealFft, SpectrumLayout};
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    re: f32,
    layout: u8,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 10000 {
        return;
    }
    if !data.re.is_finite() || data.re > 10000. || data.re < 1e-10 {
        return;
    }
    let size = data.size as usize;
    if size % 2 != 0 {
        assert!(MixFft::make_r2c_fft_f32(size).is_err());
        return;
    }
    let executor_forward = MixFft::make_r2c_fft_f32(size).unwrap();
    let executor_backwards = MixFft::make_c2r_fft_f32(size).unwrap();
    let mut chunk = vec![data.re; size];
    let mut complex = vec![Complex::new(0.0, 0.0); size / 2 + 1];
    for (i, chunk) in chunk.iter_mut().enumerate() {
        *chunk = data.re + i as f32 * 0.1;
    }
    executor_forward.execute(&chunk, &mut complex).unwrap();
    assert_eq!(complex[0].im, 0.);
    assert_eq!(complex[size / 2].im, 0.);
    executor_backwards.execute(&complex, &mut chunk).unwrap();

    let layout = match data.layout % 3 {
        0 => SpectrumLayout::HalfComplex,
        1 => SpectrumLayout::Perm,
        _ => SpectrumLayout::Ccs,
    };
    let mut packed_fft = PackedRealFft::<f32>::new(size, layout).unwrap();
    let mut packed = vec![0f32; packed_fft.packed_length()];
    packed_fft.forward(&chunk, &mut packed).unwrap();
    packed_fft.inverse(&packed, &mut chunk).unwrap();
});
