//! Fixed-point rendering against known-good digit strings.

use creal_core::Real;

#[test]
fn integer_rendering() {
    let ten = Real::from(10);
    assert_eq!(ten.to_fixed(5, 10), "10.00000");
    assert_eq!((-&ten).to_fixed(5, 10), "-10.00000");
    assert_eq!(ten.to_fixed(5, 16), "a.00000");
    assert_eq!((-&ten).to_fixed(5, 16), "-a.00000");
    assert_eq!(ten.to_fixed(0, 10), "10");
}

#[test]
fn algebra_rendering() {
    assert_eq!((&Real::from(3) + &Real::from(2)).to_fixed(5, 10), "5.00000");
    assert_eq!((&Real::from(3) - &Real::from(2)).to_fixed(5, 10), "1.00000");
    assert_eq!((&Real::from(3) * &Real::from(2)).to_fixed(5, 10), "6.00000");
    assert_eq!(
        (&Real::from(3) * &Real::from_f32(2.25).unwrap()).to_fixed(5, 10),
        "6.75000"
    );
    assert_eq!(Real::from(2).inverse().to_fixed(5, 10), "0.50000");
    assert_eq!(
        Real::from_f32(3.0).unwrap().inverse().to_fixed(5, 10),
        "0.33333"
    );
    assert_eq!((&Real::from(6) / &Real::from(2)).to_fixed(5, 10), "3.00000");
}

#[test]
fn float_conversions_are_exact() {
    let f32_sum = &Real::from_f32(0.1).unwrap() + &Real::from_f32(0.2).unwrap();
    assert_eq!(f32_sum.to_fixed(20, 10), "0.30000000447034835815");

    let f64_sum = &Real::from_f64(0.1).unwrap() + &Real::from_f64(0.2).unwrap();
    assert_eq!(f64_sum.to_fixed(20, 10), "0.30000000000000001665");

    let exact = &Real::from(10).inverse() + &Real::from(5).inverse();
    assert_eq!(exact.to_fixed(20, 10), "0.30000000000000000000");

    assert_eq!(
        Real::from_f64(std::f64::consts::E).unwrap().to_fixed(20, 10),
        "2.71828182845904509080"
    );
}

#[test]
fn one_ninth_in_many_radices() {
    let ninth = Real::from(9).inverse();
    assert_eq!(ninth.to_fixed(20, 10), "0.11111111111111111111");
    assert_eq!(ninth.to_fixed(20, 2), "0.00011100011100011101");
    assert_eq!(ninth.to_fixed(20, 4), "0.01301301301301301302");
    assert_eq!(ninth.to_fixed(20, 8), "0.07070707070707070707");
    assert_eq!(ninth.to_fixed(20, 12), "0.14000000000000000000");
    assert_eq!(ninth.to_fixed(20, 16), "0.1c71c71c71c71c71c71c");

    let neg = -&ninth;
    assert_eq!(neg.to_fixed(20, 10), "-0.11111111111111111111");
    assert_eq!(neg.abs().to_fixed(20, 10), "0.11111111111111111111");
    assert_eq!(neg.abs().abs().to_fixed(20, 10), "0.11111111111111111111");

    let nine = Real::from(9);
    assert_eq!((&nine.inverse() * &nine).to_fixed(5, 10), "1.00000");
}

#[test]
fn constants_to_seventy_digits() {
    assert_eq!(
        Real::from(1).exp().unwrap().to_fixed(70, 10),
        "2.7182818284590452353602874713526624977572470936999595749669676277240766"
    );
    assert_eq!(
        Real::e().to_fixed(70, 10),
        "2.7182818284590452353602874713526624977572470936999595749669676277240766"
    );
    assert_eq!(
        Real::pi().to_fixed(70, 10),
        "3.1415926535897932384626433832795028841971693993751058209749445923078164"
    );
    assert_eq!(
        Real::phi().to_fixed(70, 10),
        "1.6180339887498948482045868343656381177203091798057628621354486227052605"
    );
    assert_eq!(
        Real::ln2().to_fixed(70, 10),
        "0.6931471805599453094172321214581765680755001343602552541206800094933936"
    );
    assert_eq!(
        Real::sqrt2().to_fixed(70, 10),
        "1.4142135623730950488016887242096980785696718753769480731766797379907325"
    );
}

#[test]
fn square_roots() {
    let sqrt11 = Real::from(11).sqrt();
    assert_eq!(sqrt11.to_fixed(5, 10), "3.31662");
    assert_eq!(sqrt11.square().to_fixed(5, 10), "11.00000");

    let sqrt11f = Real::from_f64(11.0).unwrap().sqrt();
    assert_eq!(
        sqrt11f.square().to_fixed(70, 10),
        sqrt11.square().to_fixed(70, 10)
    );
}

#[test]
fn trig_rendering() {
    let third_pi = &Real::pi() / &Real::from(3);
    assert_eq!(
        third_pi.to_fixed(70, 10),
        "1.0471975511965977461542144610931676280657231331250352736583148641026055"
    );
    assert_eq!(
        third_pi.cos().unwrap().to_fixed(70, 10),
        "0.5000000000000000000000000000000000000000000000000000000000000000000000"
    );

    let half_pi = &Real::pi() / &Real::from(2);
    assert_eq!(
        half_pi.tan().unwrap().to_fixed(70, 10),
        "<undefined: division by zero>"
    );
}

#[test]
fn powers() {
    assert_eq!(
        Real::from(2).pow(&Real::from(3)).unwrap().to_fixed(70, 10),
        "8.0000000000000000000000000000000000000000000000000000000000000000000000"
    );
    assert_eq!(
        Real::from(2).pow(&Real::from(-3)).unwrap().to_fixed(70, 10),
        "0.1250000000000000000000000000000000000000000000000000000000000000000000"
    );

    // (√π − √3)^8
    let base = &Real::pi().sqrt() - &Real::from(3).sqrt();
    assert_eq!(
        base.pow(&Real::from(8)).unwrap().to_fixed(70, 10),
        "0.0000000000071008875411429851278570030225300893747800769074951130688105"
    );

    // 3^(9/7)
    assert_eq!(
        Real::from(3)
            .pow(&Real::from_ratio(9, 7))
            .unwrap()
            .to_fixed(70, 10),
        "4.1062143199266050245271033659920889591493609394572477980497607290832348"
    );

    // π^e
    assert_eq!(
        Real::pi().pow(&Real::e()).unwrap().to_fixed(70, 10),
        "22.4591577183610454734271522045437350275893151339966922492030025540669260"
    );
}

#[test]
fn powers_of_ten() {
    assert_eq!(
        Real::pow10(&Real::from(2)).unwrap().to_fixed(5, 10),
        "100.00000"
    );
    assert_eq!(
        Real::pow10(&Real::from(-1)).unwrap().to_fixed(5, 10),
        "0.10000"
    );
}
