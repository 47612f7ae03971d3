use na::{Vector3, Vector4};

pub type Fp = f64;
pub type Vec3f = Vector3<Fp>;
pub type Vec4f = Vector4<Fp>;

pub type Rgb = Vec3f;
pub type Rgba = Vec4f;

pub static EPS: Fp = 1e-9;

pub const FULL_TURN: Fp = 2.0 * std::f64::consts::PI;

pub fn rgb_of(v: &Rgba) -> Rgb {
    Rgb::new(v.x, v.y, v.z)
}

pub fn one_extend(v: Rgb) -> Rgba {
    Rgba::new(v.x, v.y, v.z, 1.0 as Fp)
}

pub fn rgb_from_f32(c: [f32; 3]) -> Rgb {
    Rgb::new(c[0] as Fp, c[1] as Fp, c[2] as Fp)
}

pub fn rgba_from_f32(c: [f32; 4]) -> Rgba {
    Rgba::new(c[0] as Fp, c[1] as Fp, c[2] as Fp, c[3] as Fp)
}
