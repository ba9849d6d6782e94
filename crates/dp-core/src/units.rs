// dp-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, AngularVelocity as UomAngularVelocity,
    Length as UomLength, Mass as UomMass, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type AngularVelocity = UomAngularVelocity;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn degps(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::degree_per_second;
    AngularVelocity::new::<degree_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    #[inline]
    pub fn g0() -> Accel {
        mps2(G0_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _g = mps2(9.8);
        let _l = m(1.0);
        let _mass = kg(1.0);
        let _dt = s(0.05);
        let _th = rad(std::f64::consts::PI);
        let _g0 = constants::g0();
    }

    #[test]
    fn degrees_convert_to_radians() {
        use uom::si::angle::radian;
        let th = deg(180.0);
        let v = th.get::<radian>();
        assert!((v - std::f64::consts::PI).abs() < 1e-12);

        use uom::si::angular_velocity::radian_per_second;
        let w = degps(90.0);
        assert!((w.get::<radian_per_second>() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
