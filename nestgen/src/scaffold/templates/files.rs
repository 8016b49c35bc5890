//! Template file contents

/// Module wiring template
pub const MODULE_TEMPLATE: &str = r#"import { Module } from '@nestjs/common';

import { PrismaService } from 'src/shared/infra/database/prisma/prisma.service';

import { {{model_name}}Repository } from './core/repositories/{{singular_name}}.repository';
import { Create{{model_name}}UseCase } from './core/use-cases/create-{{singular_name}}.use-case';
import { Delete{{model_name}}UseCase } from './core/use-cases/delete-{{singular_name}}.use-case';
import { Find{{model_name}}ByIdUseCase } from './core/use-cases/find-{{singular_name}}-by-id.use-case';
import { List{{model_plural}}UseCase } from './core/use-cases/list-{{module_name}}.use-case';
import { Update{{model_name}}UseCase } from './core/use-cases/update-{{singular_name}}.use-case';
import { Prisma{{model_name}}Repository } from './infra/database/prisma/repositories/prisma.{{singular_name}}.repository';
import { {{model_name}}Controller } from './infra/http/controllers/{{singular_name}}.controller';

@Module({
  controllers: [{{model_name}}Controller],
  providers: [
    PrismaService,
    {
      provide: {{model_name}}Repository,
      useClass: Prisma{{model_name}}Repository,
    },
    Create{{model_name}}UseCase,
    Delete{{model_name}}UseCase,
    Find{{model_name}}ByIdUseCase,
    List{{model_plural}}UseCase,
    Update{{model_name}}UseCase,
  ],
  exports: [{{model_name}}Repository],
})
export class {{model_plural}}Module {}
"#;

/// Domain entity template
pub const ENTITY_TEMPLATE: &str = r#"export class {{model_name}}Entity {
{{#each entity_fields}}
{{#each decorators}}
  {{this}}
{{/each}}
  {{name}}{{#if is_required}}!{{else}}?{{/if}}: {{property_type}};
{{#unless @last}}

{{/unless}}
{{/each}}

  constructor(props: Partial<{{model_name}}Entity>) {
    Object.assign(this, props);
  }
}
"#;

/// Entity to HTTP response mapper template
pub const MAPPER_TEMPLATE: &str = r#"import { {{model_name}}Entity } from '../entities/{{singular_name}}.entity';

export class {{model_name}}Mapper {
  static toResponse(entity: {{model_name}}Entity) {
    return {
{{#each fields}}
{{#unless (eq name "password")}}
      {{name}}: entity.{{name}},
{{/unless}}
{{/each}}
    };
  }

  static toResponseList(entities: {{model_name}}Entity[]) {
    return entities.map((entity) => {{model_name}}Mapper.toResponse(entity));
  }
}
"#;

/// Repository contract template
pub const REPOSITORY_TEMPLATE: &str = r#"import { {{model_name}}Entity } from '../entities/{{singular_name}}.entity';

export interface List{{model_plural}}Params {
  page: number;
  perPage: number;
  search?: string;
{{#if has_account_id}}
  accountId?: string;
{{/if}}
}

export interface Paginated{{model_plural}} {
  data: {{model_name}}Entity[];
  total: number;
  page: number;
  perPage: number;
}

export abstract class {{model_name}}Repository {
  abstract create(entity: {{model_name}}Entity): Promise<{{model_name}}Entity>;
  abstract findById(id: string): Promise<{{model_name}}Entity | null>;
{{#if has_email}}
  abstract findByEmail(email: string): Promise<{{model_name}}Entity | null>;
{{/if}}
  abstract findMany(params: List{{model_plural}}Params): Promise<Paginated{{model_plural}}>;
  abstract update(id: string, data: Partial<{{model_name}}Entity>): Promise<{{model_name}}Entity>;
  abstract delete(id: string): Promise<void>;
}
"#;

/// Create use case template
pub const USECASE_CREATE_TEMPLATE: &str = r#"import { {{#if has_email}}ConflictException, {{/if}}Injectable } from '@nestjs/common';
{{#if has_password}}
import { hash } from 'bcryptjs';
{{/if}}

import { Create{{model_name}}Dto } from '../../infra/http/dtos/create-{{singular_name}}.dto';
import { {{model_name}}Entity } from '../entities/{{singular_name}}.entity';
import { {{model_name}}Repository } from '../repositories/{{singular_name}}.repository';

@Injectable()
export class Create{{model_name}}UseCase {
  constructor(private readonly {{repo_prop_name}}: {{model_name}}Repository) {}

  async execute(dto: Create{{model_name}}Dto): Promise<{{model_name}}Entity> {
{{#if has_email}}
    const existing = await this.{{repo_prop_name}}.findByEmail(dto.email);
    if (existing) {
      throw new ConflictException('{{model_name}} with this email already exists');
    }

{{/if}}
    const {{entity_var_name}} = new {{model_name}}Entity({
{{#each dto_fields}}
{{#unless excluded}}
      {{name}}: dto.{{name}},
{{/unless}}
{{/each}}
    });
{{#if has_password}}

{{#if has_google_id}}
    if (dto.password && !dto.googleId) {
{{else}}
    if (dto.password) {
{{/if}}
      {{entity_var_name}}.password = await hash(dto.password, 10);
    }
{{/if}}

    return this.{{repo_prop_name}}.create({{entity_var_name}});
  }
}
"#;

/// Delete use case template
pub const USECASE_DELETE_TEMPLATE: &str = r#"import { Injectable, NotFoundException } from '@nestjs/common';

import { {{model_name}}Repository } from '../repositories/{{singular_name}}.repository';

@Injectable()
export class Delete{{model_name}}UseCase {
  constructor(private readonly {{repo_prop_name}}: {{model_name}}Repository) {}

  async execute(id: string): Promise<void> {
    const {{entity_var_name}} = await this.{{repo_prop_name}}.findById(id);
    if (!{{entity_var_name}}) {
      throw new NotFoundException('{{model_name}} not found');
    }

    await this.{{repo_prop_name}}.delete(id);
  }
}
"#;

/// Find-by-id use case template
pub const USECASE_FIND_BY_ID_TEMPLATE: &str = r#"import { Injectable, NotFoundException } from '@nestjs/common';

import { {{model_name}}Entity } from '../entities/{{singular_name}}.entity';
import { {{model_name}}Repository } from '../repositories/{{singular_name}}.repository';

@Injectable()
export class Find{{model_name}}ByIdUseCase {
  constructor(private readonly {{repo_prop_name}}: {{model_name}}Repository) {}

  async execute(id: string): Promise<{{model_name}}Entity> {
    const {{entity_var_name}} = await this.{{repo_prop_name}}.findById(id);
    if (!{{entity_var_name}}) {
      throw new NotFoundException('{{model_name}} not found');
    }

    return {{entity_var_name}};
  }
}
"#;

/// List use case template
pub const USECASE_LIST_TEMPLATE: &str = r#"import { Injectable } from '@nestjs/common';

import {
  List{{model_plural}}Params,
  Paginated{{model_plural}},
  {{model_name}}Repository,
} from '../repositories/{{singular_name}}.repository';

const DEFAULT_PER_PAGE = 20;
const MAX_PER_PAGE = 100;

@Injectable()
export class List{{model_plural}}UseCase {
  constructor(private readonly {{repo_prop_name}}: {{model_name}}Repository) {}

  async execute(params: List{{model_plural}}Params): Promise<Paginated{{model_plural}}> {
    const page = Math.max(1, params.page || 1);
    const perPage = Math.min(MAX_PER_PAGE, Math.max(1, params.perPage || DEFAULT_PER_PAGE));

    return this.{{repo_prop_name}}.findMany({ ...params, page, perPage });
  }
}
"#;

/// Update use case template
pub const USECASE_UPDATE_TEMPLATE: &str = r#"import { {{#if has_email}}ConflictException, {{/if}}Injectable, NotFoundException } from '@nestjs/common';

import { Update{{model_name}}Dto } from '../../infra/http/dtos/update-{{singular_name}}.dto';
import { {{model_name}}Entity } from '../entities/{{singular_name}}.entity';
import { {{model_name}}Repository } from '../repositories/{{singular_name}}.repository';

@Injectable()
export class Update{{model_name}}UseCase {
  constructor(private readonly {{repo_prop_name}}: {{model_name}}Repository) {}

  async execute(id: string, dto: Update{{model_name}}Dto): Promise<{{model_name}}Entity> {
    const {{entity_var_name}} = await this.{{repo_prop_name}}.findById(id);
    if (!{{entity_var_name}}) {
      throw new NotFoundException('{{model_name}} not found');
    }
{{#if has_email}}

    if (dto.email && dto.email !== {{entity_var_name}}.email) {
      const existing = await this.{{repo_prop_name}}.findByEmail(dto.email);
      if (existing) {
        throw new ConflictException('{{model_name}} with this email already exists');
      }
    }
{{/if}}

    return this.{{repo_prop_name}}.update(id, dto);
  }
}
"#;

/// Persistence mapper template
pub const PRISMA_MAPPER_TEMPLATE: &str = r#"import { {{model_name}} as Prisma{{model_name}}, Prisma } from '{{client_module}}';

import { {{model_name}}Entity } from '../../../../core/entities/{{singular_name}}.entity';

export class Prisma{{model_name}}Mapper {
  static toDomain(raw: Prisma{{model_name}}): {{model_name}}Entity {
    return new {{model_name}}Entity({
{{#each fields}}
      {{name}}: raw.{{name}}{{#unless is_required}} ?? undefined{{/unless}},
{{/each}}
    });
  }

  static toPrisma(entity: {{model_name}}Entity): Prisma.{{model_name}}UncheckedCreateInput {
    return {
{{#each fields}}
      {{name}}: entity.{{name}}{{#if (eq ts_type "Record<string, any>")}} as Prisma.InputJsonValue{{/if}},
{{/each}}
    };
  }
}
"#;

/// Persistence repository template
pub const PRISMA_REPOSITORY_TEMPLATE: &str = r#"import { Injectable } from '@nestjs/common';
import { Prisma } from '{{client_module}}';

import { PrismaService } from 'src/shared/infra/database/prisma/prisma.service';

import { {{model_name}}Entity } from '../../../../core/entities/{{singular_name}}.entity';
import {
  List{{model_plural}}Params,
  Paginated{{model_plural}},
  {{model_name}}Repository,
} from '../../../../core/repositories/{{singular_name}}.repository';
import { Prisma{{model_name}}Mapper } from '../mappers/prisma.{{singular_name}}.mapper';

@Injectable()
export class Prisma{{model_name}}Repository implements {{model_name}}Repository {
  constructor(private readonly prisma: PrismaService) {}

  async create(entity: {{model_name}}Entity): Promise<{{model_name}}Entity> {
    const created = await this.prisma.{{model_camel}}.create({
      data: Prisma{{model_name}}Mapper.toPrisma(entity),
    });
    return Prisma{{model_name}}Mapper.toDomain(created);
  }

  async findById(id: string): Promise<{{model_name}}Entity | null> {
    const found = await this.prisma.{{model_camel}}.findUnique({ where: { {{id_field}}: id } });
    return found ? Prisma{{model_name}}Mapper.toDomain(found) : null;
  }
{{#if has_email}}

  async findByEmail(email: string): Promise<{{model_name}}Entity | null> {
    const found = await this.prisma.{{model_camel}}.findFirst({ where: { email } });
    return found ? Prisma{{model_name}}Mapper.toDomain(found) : null;
  }
{{/if}}

  async findMany(params: List{{model_plural}}Params): Promise<Paginated{{model_plural}}> {
    const { page, perPage{{#if has_searchable_fields}}, search{{/if}}{{#if has_account_id}}, accountId{{/if}} } = params;

    const where: Prisma.{{model_name}}WhereInput = {
{{#if has_account_id}}
      ...(accountId ? { accountId } : {}),
{{/if}}
{{#if has_searchable_fields}}
      ...(search
        ? {
            OR: [
{{#each searchable_fields}}
              { {{this}}: { contains: search, mode: 'insensitive' } },
{{/each}}
            ],
          }
        : {}),
{{/if}}
    };

    const [items, total] = await this.prisma.$transaction([
      this.prisma.{{model_camel}}.findMany({
        where,
        skip: (page - 1) * perPage,
        take: perPage,
        orderBy: { {{order_field}}: 'desc' },
      }),
      this.prisma.{{model_camel}}.count({ where }),
    ]);

    return {
      data: items.map((item) => Prisma{{model_name}}Mapper.toDomain(item)),
      total,
      page,
      perPage,
    };
  }

  async update(id: string, data: Partial<{{model_name}}Entity>): Promise<{{model_name}}Entity> {
    const updated = await this.prisma.{{model_camel}}.update({
      where: { {{id_field}}: id },
      data,
    });
    return Prisma{{model_name}}Mapper.toDomain(updated);
  }

  async delete(id: string): Promise<void> {
    await this.prisma.{{model_camel}}.delete({ where: { {{id_field}}: id } });
  }
}
"#;

/// HTTP controller template
pub const CONTROLLER_TEMPLATE: &str = r#"import {
  Body,
  Controller,
  Delete,
  Get,
{{#if has_account_id}}
  Headers,
{{/if}}
  HttpCode,
  HttpStatus,
  Param,
  ParseUUIDPipe,
  Patch,
  Post,
  Query,
} from '@nestjs/common';

import { {{model_name}}Mapper } from '../../../core/mappers/{{singular_name}}.mapper';
import { Create{{model_name}}UseCase } from '../../../core/use-cases/create-{{singular_name}}.use-case';
import { Delete{{model_name}}UseCase } from '../../../core/use-cases/delete-{{singular_name}}.use-case';
import { Find{{model_name}}ByIdUseCase } from '../../../core/use-cases/find-{{singular_name}}-by-id.use-case';
import { List{{model_plural}}UseCase } from '../../../core/use-cases/list-{{module_name}}.use-case';
import { Update{{model_name}}UseCase } from '../../../core/use-cases/update-{{singular_name}}.use-case';
import { Create{{model_name}}Dto } from '../dtos/create-{{singular_name}}.dto';
import { Update{{model_name}}Dto } from '../dtos/update-{{singular_name}}.dto';

@Controller('{{kebab model_plural}}')
export class {{model_name}}Controller {
  constructor(
    private readonly create{{model_name}}: Create{{model_name}}UseCase,
    private readonly delete{{model_name}}: Delete{{model_name}}UseCase,
    private readonly find{{model_name}}ById: Find{{model_name}}ByIdUseCase,
    private readonly list{{model_plural}}: List{{model_plural}}UseCase,
    private readonly update{{model_name}}: Update{{model_name}}UseCase,
  ) {}

  @Post()
{{#if has_account_id}}
  async create(@Body() dto: Create{{model_name}}Dto, @Headers('x-account-id') accountId?: string) {
    const {{entity_var_name}} = await this.create{{model_name}}.execute({ ...dto, accountId: accountId ?? dto.accountId });
{{else}}
  async create(@Body() dto: Create{{model_name}}Dto) {
    const {{entity_var_name}} = await this.create{{model_name}}.execute(dto);
{{/if}}
    return {{model_name}}Mapper.toResponse({{entity_var_name}});
  }

  @Get()
  async list(
    @Query('page') page?: string,
    @Query('perPage') perPage?: string,
    @Query('search') search?: string,
{{#if has_account_id}}
    @Query('accountId') accountId?: string,
{{/if}}
  ) {
    const result = await this.list{{model_plural}}.execute({
      page: Number(page) || 1,
      perPage: Number(perPage) || 20,
      search,
{{#if has_account_id}}
      accountId,
{{/if}}
    });
    return { ...result, data: {{model_name}}Mapper.toResponseList(result.data) };
  }

  @Get(':id')
  async findById(@Param('id', ParseUUIDPipe) id: string) {
    const {{entity_var_name}} = await this.find{{model_name}}ById.execute(id);
    return {{model_name}}Mapper.toResponse({{entity_var_name}});
  }

  @Patch(':id')
  async update(@Param('id', ParseUUIDPipe) id: string, @Body() dto: Update{{model_name}}Dto) {
    const {{entity_var_name}} = await this.update{{model_name}}.execute(id, dto);
    return {{model_name}}Mapper.toResponse({{entity_var_name}});
  }

  @Delete(':id')
  @HttpCode(HttpStatus.NO_CONTENT)
  async delete(@Param('id', ParseUUIDPipe) id: string): Promise<void> {
    await this.delete{{model_name}}.execute(id);
  }
}
"#;

/// Create request DTO template
pub const DTO_CREATE_TEMPLATE: &str = r#"export class Create{{model_name}}Dto {
{{#each fields}}
{{#each decorators}}
  {{this}}
{{/each}}
  {{name}}{{#if is_required}}!{{else}}?{{/if}}: {{property_type}};
{{#unless @last}}

{{/unless}}
{{/each}}
}
"#;

/// Update request DTO template
pub const DTO_UPDATE_TEMPLATE: &str = r#"export class Update{{model_name}}Dto {
{{#each fields}}
  @IsOptional()
{{#each decorators}}
{{#unless (eq this "@IsOptional()")}}
  {{this}}
{{/unless}}
{{/each}}
  {{name}}?: {{property_type}};
{{#unless @last}}

{{/unless}}
{{/each}}
}
"#;
