use std::io::Write;

use fixed_algebra::*;

use crate::report::Report;

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
  let mut r = Report::new(out);

  r.section("Testing Matrix constructors")?;
  let m22i = Matrix22::new(1, 2, 3, 4);
  let m33f = Matrix33::new(1.0_f32, 2., 3., 4., 5., 6., 7., 8., 9.);
  let m44d = Matrix44::from(std::array::from_fn::<f64, 16, _>(|i| i as f64 + 1.));
  r.value("m22i zero", Matrix22i::zero())?;
  r.value("m22i splat 1", Matrix22i::splat(1))?;
  r.value("m22i", m22i)?;
  r.value("m33f", m33f)?;
  r.value("m44d", m44d)?;

  r.section("Testing Matrix array indexing")?;
  r.value("m22i", format!("{}, {}, {}, {}", m22i[0], m22i[1], m22i[2], m22i[3]))?;
  r.value("m33f[4]", m33f[4])?;
  r.value("m44d[15]", m44d[15])?;

  r.section("Testing Matrix assignment")?;
  let mut m = Matrix22i::zero();
  r.value("before", m)?;
  m.assign(5, 6, 7, 8);
  r.value("after assign()", m)?;
  m = m22i;
  r.value("after =", m)?;

  r.section("Testing Matrix comparison")?;
  r.value("m22i == m", m22i == m)?;
  r.value("m22i == identity", m22i == Matrix22::identity())?;

  r.section("Testing Matrix addition")?;
  r.value("m22i + m22i", m22i + m22i)?;
  let mut sum = m33f;
  sum += Matrix33::identity();
  r.value("m33f += identity", sum)?;

  r.section("Testing Matrix subtraction")?;
  r.value("m22i - identity", m22i - Matrix22::identity())?;
  r.value("-m22i", -m22i)?;

  r.section("Testing Matrix scalar multiplication")?;
  r.value("m22i * 3", m22i * 3)?;
  r.value("0.5f * m33f", 0.5_f32 * m33f)?;
  r.value("m22i * 1.5", m22i * 1.5_f64)?;

  r.section("Testing Matrix scalar division")?;
  r.value("m22i / 2", m22i / 2)?;
  r.value("m33f / 2.0", m33f / 2.0_f64)?;

  r.section("Testing Matrix multiplication")?;
  let b = Matrix22::new(5, 6, 7, 8);
  r.value("m22i * (5, 6, 7, 8)", m22i * b)?;
  r.value("(5, 6, 7, 8) * m22i", b * m22i)?;
  r.value("m44d * identity", m44d * Matrix44::identity())?;
  r.value("(1, 1) * m22i", vec2(1, 1) * m22i)?;
  r.value("m22i * (1, 1)", m22i * vec2(1, 1))?;

  r.section("Testing Matrix det")?;
  r.value("det(m22i)", det(&m22i))?;
  r.value("det(m33f)", det(&m33f))?;
  r.value("det(identity 4x4)", det(&Matrix44d::identity()))?;

  r.section("Testing Matrix transpose")?;
  r.value("transpose(m22i)", transpose(&m22i))?;
  r.value("transpose(m33f)", transpose(&m33f))?;

  r.section("Testing Matrix setidentity")?;
  let mut id = m44d;
  id.set_identity();
  r.value("m44d.set_identity()", id)?;

  r.section("Testing Matrix getrow() and getcol()")?;
  for i in 0..3 {
    r.value(&format!("m33f row {}", i), m33f.row(i))?;
    r.value(&format!("m33f col {}", i), m33f.col(i))?;
  }

  r.section("Testing Matrix setrow() and setcol()")?;
  let mut m = Matrix33i::zero();
  m.set_row(0, vec3(1, 2, 3)).set_col(2, [7, 8, 9]);
  r.value("row 0 then col 2", m)?;
  let mut m = Matrix44i::identity();
  m.set_col(3, (1, 2, 3, 1));
  r.value("col 3 = (1, 2, 3, 1)", m)?;

  r.section("Testing Matrix transform builders")?;
  let mut t = Matrix44d::zero();
  translation_mat44(&mut t, vec3(1., 2., 3.));
  r.value("translation (1, 2, 3)", t)?;
  let mut rot = Matrix33d::zero();
  rotation_mat33(&mut rot, Deg::by(90.).to_rad(), vec3(0., 0., 1.));
  r.value("rotation 90 about z", rot)?;
  rotation_mat33(&mut rot, 1., Vector3::zero());
  r.value("rotation about zero axis", rot)?;
  rotation_mat44(&mut t, Deg::by(30.).to_rad(), vec3(1., 0., 0.));
  r.value("rotation 30 about x", t)?;
  uniform_scale_mat44(&mut t, 2);
  r.value("uniform scale 2", t)?;
  scale_mat44(&mut t, vec3(1., 2., 3.));
  r.value("scale (1, 2, 3)", t)?;
  scale_along_axes_mat44(
    &mut t,
    vec3(2., 1., 1.),
    vec3(0., 1., 0.),
    vec3(-1., 0., 0.),
    vec3(0., 0., 1.),
  );
  r.value("scale 2 along y", t)?;
  shear_mat44(&mut t, 0, 1, 0.5);
  r.value("shear x by y", t)?;
  transform_mat44(&mut t, PI / 2., vec3(0., 1., 0.), vec3(4., 5., 6.));
  r.value("rotate y then translate", t)?;
  rotation_about_point_mat44(&mut t, PI, vec3(0., 0., 1.), vec3(1., 1., 0.));
  r.value("half turn about (1, 1, 0)", t)?;
  r.value("  maps (2, 1, 0, 1) to", t * vec4(2., 1., 0., 1.))?;

  r.section("Testing Matrix projections")?;
  let mut p = Matrix44d::zero();
  ortho_mat44(&mut p, 1., 100., -2., 2., -1.5, 1.5);
  r.value("ortho", p)?;
  persp_mat44(&mut p, 1., 100., -1., 1., -1., 1.);
  r.value("perspective", p)?;
  persp_inf_mat44(&mut p, 1., -1., 1., -1., 1.);
  r.value("infinite perspective", p)?;
  let mut camera = PerspectiveProjection::<f64>::default();
  camera.resize((1280., 720.));
  camera.update_projection(&mut p);
  r.value("camera 1280x720", p)?;

  Ok(())
}
