use std::io::Write;

use fixed_algebra::*;

use crate::report::Report;

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
  let mut r = Report::new(out);

  r.section("Testing Vector constructors")?;
  r.value("v2i_1", Vector2i::zero())?;
  r.value("v2i_2", Vector2i::splat(1))?;
  r.value("v2i_3", vec2(1, 2))?;
  r.value("v3f_1", Vector3f::zero())?;
  r.value("v3f_2", Vector3f::splat(1.))?;
  r.value("v3f_3", vec3(1.0_f32, 2., 3.))?;
  r.value("v4d_1", Vector4d::zero())?;
  r.value("v4d_3", vec4(1.0_f64, 2., 3., 4.))?;
  r.value("v4d from v2", Vector4::from(vec2(1.0_f64, 2.)))?;

  r.section("Testing Vector array indexing")?;
  let v2i = vec2(1, 2);
  let v3f = vec3(1.1_f32, 2.2, 3.3);
  let v4d = vec4(1.1_f64, 2.2, 3.3, 4.4);
  r.value("v2i", format!("{}, {}", v2i[0], v2i[1]))?;
  r.value("v3f", format!("{}, {}, {}", v3f[0], v3f[1], v3f[2]))?;
  r.value(
    "v4d",
    format!("{}, {}, {}, {}", v4d[0], v4d[1], v4d[2], v4d[3]),
  )?;

  r.section("Testing Vector assignment")?;
  let mut v2i_2 = Vector2i::zero();
  let mut v3f_2 = Vector3f::zero();
  r.value("v2i_2", v2i_2)?;
  v2i_2 = v2i;
  v3f_2.assign(2.2, 2.2, 2.2);
  r.note("After assignment")?;
  r.value("v2i_2", v2i_2)?;
  r.value("v3f_2", v3f_2)?;

  r.section("Testing Vector comparison")?;
  r.value("v2i == (1, 2)", v2i == vec2(1, 2))?;
  r.value("v3f == 0", v3f == Vector3f::zero())?;
  r.value("v4d != 0", v4d != Vector4d::zero())?;

  r.section("Testing Vector addition")?;
  r.value("v2i + (3, 4)", v2i + vec2(3, 4))?;
  let mut sum = v3f;
  sum += v3f;
  r.value("v3f += v3f", sum)?;

  r.section("Testing Vector subtraction")?;
  r.value("v2i - (3, 4)", v2i - vec2(3, 4))?;
  r.value("-v4d", -v4d)?;

  r.section("Testing Vector scalar multiplication")?;
  r.value("v2i * 2", v2i * 2)?;
  r.value("v2i * 1.5f", v2i * 1.5_f32)?;
  r.value("2.5 * v3f", 2.5_f64 * v3f)?;
  let mut scaled = v4d;
  scaled *= 3;
  r.value("v4d *= 3", scaled)?;

  r.section("Testing Vector scalar division")?;
  r.value("v2i / 2", v2i / 2)?;
  r.value("v3f / 2.0f", v3f / 2.0_f32)?;
  r.value("v4d / 0.5", v4d / 0.5_f64)?;

  r.section("Testing Vector cross product")?;
  let x = vec3(1.0_f32, 0., 0.);
  let y = vec3(0.0_f32, 1., 0.);
  r.value("x cross y", x.cross(y))?;
  r.value("y cross x", y.cross(x))?;
  let mut into = Vector3f::zero();
  v3f.cross_into(vec3(-1., 0.5, 2.), &mut into);
  r.value("v3f cross (-1, 0.5, 2)", into)?;

  r.section("Testing Vector dot product")?;
  r.value("v2i . (3, 4)", v2i.dot(vec2(3, 4)))?;
  r.value("x . y", x.dot(y))?;
  r.value("v4d . v4d", v4d.dot(v4d))?;

  r.section("Testing Vector length")?;
  r.value("|(3, 4)|", vec2(3, 4).length())?;
  r.value("|v3f|", v3f.length())?;

  r.section("Testing Vector normalize")?;
  let mut n = v4d;
  n.normalize();
  r.value("v4d normalized", n)?;
  r.value("length", n.length())?;
  r.value("zero normalized", *Vector3d::zero().normalize())?;

  r.section("Testing Vector get_angle")?;
  r.value("x, y", x.get_angle(y))?;
  r.value("(1, 1), (1, 0)", vec2(1., 1.).get_angle(vec2(1., 0.)))?;
  r.value("(1, 0), (-1, 1)", vec2(1., 0.).get_angle(vec2(-1., 1.)))?;
  r.value("in degrees", rad_to_deg(vec2(1., 0.).get_angle(vec2(-1., 1.))))?;

  r.section("Testing Vector get_anglen")?;
  let mut a = vec3(1.0_f64, 1., 0.);
  a.normalize();
  r.value("(1, 1, 0)n, x", a.get_anglen(vec3(1., 0., 0.)))?;
  r.value("x, -x", x.get_anglen(-x))?;

  r.section("Testing Vector get_proj")?;
  r.value("(2, 3) onto (1, 0)", vec2(2., 3.).proj(vec2(1., 0.)))?;
  let mut p = Vector3d::zero();
  vec3(1., 2., 3.).proj_into(vec3(0., 0., 2.), &mut p);
  r.value("(1, 2, 3) onto (0, 0, 2)", p)?;

  Ok(())
}
